// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod logging;
pub mod render;
pub mod store;
