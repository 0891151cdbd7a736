mod common;
mod reporting;
mod routing;
