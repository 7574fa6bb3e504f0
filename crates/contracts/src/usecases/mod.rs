pub mod u501_monthly_billing;
