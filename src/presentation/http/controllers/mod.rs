pub mod resolvers;
pub mod uploads;
