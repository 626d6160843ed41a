mod record;
mod summary;

use super::*;
use test_utils::{builder::TestBuilder, factory};
