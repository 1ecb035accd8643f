use crate::infra::InMemoryLeadRepository;
use clap::Args;
use lead_desk::error::AppError;
use lead_desk::workflows::leads::qualification::{ScoreBreakdown, ScoreFactor};
use lead_desk::workflows::leads::{
    ConflictCheckStatus, IntakeSettings, LeadFilters, LeadForm, LeadIntakeService,
    LeadServiceError, LeadSortKey, LeadSourceType, QualificationInputs, SortOrder,
};
use lead_desk::workflows::leads::FilterError;
use lead_desk::workflows::tasks::TaskFilters;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Budget range option (e.g. 50k_100k)
    #[arg(long, default_value = "unknown")]
    pub(crate) budget: String,
    /// Authority level option (e.g. decision_maker)
    #[arg(long, default_value = "unknown")]
    pub(crate) authority: String,
    /// Need level option (e.g. urgent)
    #[arg(long, default_value = "unknown")]
    pub(crate) need: String,
    /// Purchase timeline option (e.g. this_month)
    #[arg(long, default_value = "unknown")]
    pub(crate) timeline: String,
    /// The lead supplied an email address
    #[arg(long)]
    pub(crate) email: bool,
    /// The lead supplied a phone number
    #[arg(long)]
    pub(crate) phone: bool,
    /// The lead supplied a company name
    #[arg(long)]
    pub(crate) company: bool,
    /// Estimated matter value
    #[arg(long, default_value_t = 0)]
    pub(crate) estimated_value: u64,
    /// A practice area has been identified
    #[arg(long)]
    pub(crate) practice_area: bool,
    /// Conflict check outcome (pending, clear, potential_conflict, conflict)
    #[arg(long, default_value = "pending", value_parser = crate::infra::parse_conflict_status)]
    pub(crate) conflict_status: ConflictCheckStatus,
    /// Flag the lead as VIP
    #[arg(long)]
    pub(crate) vip: bool,
    /// Print the breakdown as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    fn inputs(&self) -> QualificationInputs {
        QualificationInputs {
            budget: self.budget.trim().to_string(),
            authority: self.authority.trim().to_string(),
            need: self.need.trim().to_string(),
            timeline: self.timeline.trim().to_string(),
            has_email: self.email,
            has_phone: self.phone,
            has_company: self.company,
            estimated_value: self.estimated_value,
            has_practice_area: self.practice_area,
            conflict_status: self.conflict_status,
            is_vip: self.vip,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the filtered lead listing at the end of the demo.
    #[arg(long)]
    pub(crate) skip_listing: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TaskQueryArgs {
    /// Status tab: all, active or completed
    #[arg(long)]
    pub(crate) tab: Option<String>,
    /// Free-text search
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Priority: none, low, medium, high or critical
    #[arg(long)]
    pub(crate) priority: Option<String>,
    /// Assignee: me, unassigned or a team member id
    #[arg(long)]
    pub(crate) assigned_to: Option<String>,
    /// Restrict to one case
    #[arg(long)]
    pub(crate) case_id: Option<String>,
    /// Due window: today, thisWeek, thisMonth or overdue
    #[arg(long)]
    pub(crate) due: Option<String>,
    /// Sort key: dueDate, priority, createdAt or title
    #[arg(long)]
    pub(crate) sort_by: Option<String>,
}

impl TaskQueryArgs {
    fn filters(&self) -> Result<TaskFilters, FilterError> {
        let params: HashMap<String, String> = [
            ("tab", &self.tab),
            ("search", &self.search),
            ("priority", &self.priority),
            ("assignedTo", &self.assigned_to),
            ("caseId", &self.case_id),
            ("dueDate", &self.due),
            ("sortBy", &self.sort_by),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|value| (name.to_string(), value)))
        .collect();
        TaskFilters::from_query(&params)
    }
}

pub(crate) fn render_task_query(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

pub(crate) fn run_task_query(args: TaskQueryArgs) -> Result<(), AppError> {
    let filters = args.filters()?;
    println!("{}", render_task_query(&filters.to_query_pairs()));
    if filters.has_active_filters() {
        println!("(filters active)");
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let service = LeadIntakeService::new(
        Arc::new(InMemoryLeadRepository::default()),
        IntakeSettings::default(),
    );
    let breakdown = service.preview(&args.inputs());

    if args.json {
        match serde_json::to_string_pretty(&breakdown) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Score breakdown unavailable: {err}"),
        }
        return Ok(());
    }

    render_breakdown(&breakdown);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryLeadRepository::default());
    let service = LeadIntakeService::new(repository, IntakeSettings::default());

    println!("Lead intake demo");

    let mut submitted = Vec::new();
    for (label, form) in demo_forms() {
        println!("\n{label}");
        println!(
            "- live score while editing: {} ({})",
            form.score(),
            form.classification().label
        );

        match service.submit(form) {
            Ok(record) => {
                let view = record.view();
                println!(
                    "- created {} for {} -> {} / {} ({})",
                    view.id.0,
                    view.display_name,
                    view.score,
                    view.classification.label,
                    view.classification.label_ar
                );
                submitted.push(record);
            }
            Err(LeadServiceError::Validation(errors)) => {
                println!("- submission blocked:");
                for (field, error) in errors.fields() {
                    println!("    - {}: {}", field.key(), error);
                }
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(record) = submitted.first() {
        match serde_json::to_string_pretty(&record.request) {
            Ok(json) => println!("\nCreation payload for {}:\n{}", record.id.0, json),
            Err(err) => println!("\nCreation payload unavailable: {err}"),
        }
    }

    if args.skip_listing {
        return Ok(());
    }

    let filters = LeadFilters {
        sort_by: LeadSortKey::Score,
        sort_order: SortOrder::Desc,
        ..LeadFilters::default()
    };
    let page = service.list(filters.clone())?;
    let query = filters
        .to_query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    println!("\nLeads by score ({query})");
    for record in &page.records {
        println!(
            "- {:<20} {:>3}  {}",
            record.request.display_name,
            record.score(),
            record.classification().tier.token()
        );
    }
    println!("{} of {} shown", page.records.len(), page.total);

    Ok(())
}

pub(crate) fn render_breakdown(breakdown: &ScoreBreakdown) {
    println!("Qualification score breakdown");
    for component in &breakdown.components {
        let factor = match component.factor {
            ScoreFactor::Dimension(dimension) => dimension.key().to_string(),
            ScoreFactor::Bonus(rule) => format!("bonus: {}", rule.description()),
        };
        println!("- {:<40} {:>3}  {}", factor, component.points, component.notes);
    }

    if breakdown.capped {
        println!(
            "\nScore: {} (raw {} capped)",
            breakdown.score, breakdown.raw_total
        );
    } else {
        println!("\nScore: {}", breakdown.score);
    }
    println!(
        "Tier: {} / {} ({:?})",
        breakdown.classification.label,
        breakdown.classification.label_ar,
        breakdown.classification.color
    );
}

fn demo_forms() -> Vec<(&'static str, LeadForm)> {
    let mut corporate = LeadForm::new();
    corporate.first_name = "Khalid".to_string();
    corporate.last_name = "Alotaibi".to_string();
    corporate.phone = "0551234567".to_string();
    corporate.email = "khalid@najd-logistics.sa".to_string();
    corporate.company = "Najd Logistics".to_string();
    corporate.practice_area = "commercial".to_string();
    corporate.case_type = "contract_dispute".to_string();
    corporate.source_type = Some(LeadSourceType::Referral);
    corporate.estimated_value = 250_000;
    corporate.budget = "100k_500k".to_string();
    corporate.authority = "final_approver".to_string();
    corporate.need = "urgent".to_string();
    corporate.timeline = "this_week".to_string();
    corporate.conflict_status = ConflictCheckStatus::Clear;
    corporate.is_vip = true;
    corporate.add_tag("litigation");
    corporate.add_tag("enterprise");

    let mut individual = LeadForm::new();
    individual.first_name = "Noura".to_string();
    individual.last_name = "Alqahtani".to_string();
    individual.phone = "0509876543".to_string();
    individual.practice_area = "family".to_string();
    individual.source_type = Some(LeadSourceType::Website);
    individual.budget = "under_10k".to_string();
    individual.authority = "decision_maker".to_string();
    individual.need = "researching".to_string();
    individual.timeline = "this_quarter".to_string();

    let mut incomplete = LeadForm::new();
    incomplete.first_name = "Fahad".to_string();
    incomplete.phone = "+966501112233".to_string();
    incomplete.email = "fahad@".to_string();

    vec![
        ("Corporate referral", corporate),
        ("Website enquiry", individual),
        ("Incomplete walk-in", incomplete),
    ]
}
