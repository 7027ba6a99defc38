pub mod collective;
pub mod expense;
pub mod home;
pub mod transaction;
pub mod viewer;

pub use collective::{Backers, Collective, CollectivePage, CollectiveStats};
pub use expense::{Expense, ExpensePage};
pub use home::HomeData;
pub use transaction::{Subscription, Transaction, TransactionHost, TransactionKind, TransactionPage, TransactionParty};
pub use viewer::{LoggedInUser, UserSlot, ViewerCollective};
