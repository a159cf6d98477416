/// Use cases module containing application business logic orchestration
mod roll_up;

pub use roll_up::RollUpUseCase;
