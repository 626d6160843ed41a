mod lifecycle;
mod open;

use super::*;
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};
