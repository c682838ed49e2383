// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::QualificationClient;
use bqm_domain::{FormInput, QualificationOutcome};
use std::future::Future;

/// Anything that can turn a form snapshot into a qualification outcome.
///
/// The session runtime is generic over this so that tests can substitute a
/// scripted service for the HTTP client.
pub trait Qualifier: Clone + Send + Sync + 'static {
    /// Performs one exchange. Must not fail: errors are part of the outcome.
    fn qualify(&self, form: FormInput) -> impl Future<Output = QualificationOutcome> + Send;
}

impl Qualifier for QualificationClient {
    async fn qualify(&self, form: FormInput) -> QualificationOutcome {
        self.submit_for_qualification(&form).await
    }
}
