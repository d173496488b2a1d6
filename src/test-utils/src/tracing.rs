// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Enables tracing for the current thread, until the guard is dropped.
///
/// The codec logs rejected fields at `DEBUG` level. Those events are only
/// printed when the `log-tests` feature is enabled.
///
/// # Example
/// ```
/// let _guard = google_cloud_test_utils::tracing::enable_tracing();
/// tracing::warn!("printed to the test output");
/// ```
pub fn enable_tracing() -> ::tracing::subscriber::DefaultGuard {
    #[cfg(feature = "log-tests")]
    let max_level = tracing::Level::DEBUG;
    #[cfg(not(feature = "log-tests"))]
    let max_level = tracing::Level::WARN;
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_target(true)
        .with_test_writer()
        .with_max_level(max_level)
        .finish();

    tracing::subscriber::set_default(subscriber)
}
