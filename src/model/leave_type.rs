/// Leave type with its base allotment in days.
#[derive(Debug, sqlx::FromRow)]
pub struct LeaveType {
    pub id: u64,
    pub base_days: i32,
}
