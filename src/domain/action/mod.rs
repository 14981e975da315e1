pub mod cursor;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use cursor::ActionLogCursor;
pub use entity::{ActionChange, ActionLog, ActionWithChanges, NewActionChange, NewActionLog};
pub use repository::ActionLogRepository;
pub use value_objects::{
    ActionChangeId, ActionId, ActionIntent, ActionStatus, ActorType, Channel, EntityType,
};
