// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `directory`: Batch user, department and unit lookups
//! - `events`: Event reads with relations expanded
//! - `audit`: Audit event reads

pub mod audit;
pub mod directory;
pub mod events;
