/// Aggregate counters over the whole store
#[derive(Clone, Debug)]
pub struct Stats {
    pub total_todos: i64,
    pub completed_todos: i64,
    pub pending_todos: i64,
    pub total_notes: i64,
}
