mod ticket_tests;
mod token_tests;
mod user_tests;
