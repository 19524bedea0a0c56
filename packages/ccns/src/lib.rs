pub mod chain;
pub mod ledger;
pub mod lookup;
pub mod receiver;
pub mod router;
pub mod utils;
