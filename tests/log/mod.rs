mod log_linear_history;
