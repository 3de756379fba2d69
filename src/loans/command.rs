pub mod create_loan_cmd;
pub mod delete_loan_cmd;
pub mod edit_loan_cmd;
pub mod query_loans_cmd;
pub mod renew_loan_cmd;
pub mod return_loan_cmd;
