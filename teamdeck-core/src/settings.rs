pub mod policy;

pub use policy::PolicySettings;
