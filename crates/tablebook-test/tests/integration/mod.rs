mod helpers;

mod flow;
mod load;
mod query;
mod reload;
