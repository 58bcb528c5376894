pub mod access;
pub mod certificate;
pub mod citizen;
pub mod company;
pub mod feedback;
pub mod sync;
