#[cfg(test)]
mod common;

#[cfg(test)]
mod user_create_tests;

#[cfg(test)]
mod user_update_tests;

#[cfg(test)]
mod user_delete_tests;

#[cfg(test)]
mod user_search_tests;

#[cfg(test)]
mod user_workflow_tests;

#[cfg(test)]
mod seed_tests;
