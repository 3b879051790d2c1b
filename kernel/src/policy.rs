use crate::entity::UpdateStamp;

/// Supplies the timestamp an update writes to, fixed for the lifetime of the service.
pub trait DependOnUpdateStamp: 'static + Sync + Send {
    fn update_stamp(&self) -> UpdateStamp;
}
