//! Mock repositories for service and server tests.

mod mock_advocate_repository;

pub use mock_advocate_repository::MockAdvocateRepository;
