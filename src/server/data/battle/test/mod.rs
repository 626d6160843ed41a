mod advance_status;
mod create;
mod find_open;
mod set_formation;

use super::*;
use test_utils::{builder::TestBuilder, factory};
