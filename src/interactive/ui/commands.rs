use crate::interactive::domain::models::{FetchRequest, SelectionOutcome};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    FetchCatalog(FetchRequest),
    ClearMessage,
    ScheduleClearMessage(u64), // delay in milliseconds
    Exit(SelectionOutcome),
}
