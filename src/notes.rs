use chrono::naive::NaiveDateTime;

#[derive(Clone, Debug)]
pub struct Note {
    pub id: i32,
    pub todo_id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
}
