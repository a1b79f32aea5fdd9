pub mod request;
pub mod response;

pub use request::GeneratePacketRequest;
pub use response::{GeneratePacketResponse, SubmitOutcome};
