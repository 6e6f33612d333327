pub mod dog_service;

pub use dog_service::DogService;
