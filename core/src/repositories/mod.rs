pub mod health;
pub mod ticket;
pub mod user;

pub use health::StoreHealth;
pub use ticket::TicketRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "testing"))]
pub use health::MockStoreHealth;
#[cfg(any(test, feature = "testing"))]
pub use ticket::MockTicketRepository;
#[cfg(any(test, feature = "testing"))]
pub use user::MockUserRepository;
