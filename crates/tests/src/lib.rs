#[cfg(test)]
mod common;


#[cfg(test)]
mod contact_flow_tests;
