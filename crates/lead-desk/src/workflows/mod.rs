pub mod leads;
pub mod tasks;
