/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Runtime primitives used by the coordinator.
//!
//! - **`now_ms()`**: current time in milliseconds since the Unix epoch
//! - **`IntervalHandle`**: a repeating timer that fires a callback at a fixed interval
//! - **`spawn(future)`**: spawn an async task on the tokio runtime

mod native;

pub use native::*;
