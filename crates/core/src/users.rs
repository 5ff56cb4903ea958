// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use atrium_domain::{UserRecord, UserReference, classify_user_input, normalize_email, normalize_inputs};
use tracing::debug;

use crate::ports::{DirectoryLookup, LookupError};
use crate::resolve::{LookupFuture, Resolution, ResolutionBuilder, distinct, resolve_by_keys};

/// Resolves user inputs to user IDs.
///
/// Inputs containing `@` are matched by email (case-insensitively); all
/// other inputs are matched by ID. The email and ID batches are looked up
/// concurrently.
///
/// # Arguments
///
/// * `lookup` - The directory to search
/// * `inputs` - Raw user inputs
///
/// # Errors
///
/// Returns an error if any lookup fails.
pub async fn resolve_users(
    lookup: &dyn DirectoryLookup,
    inputs: &[String],
) -> Result<Resolution, LookupError> {
    let references: Vec<UserReference> = normalize_inputs(inputs)
        .iter()
        .map(|input| classify_user_input(input))
        .collect();

    let emails: Vec<String> = distinct(references.iter().filter_map(|reference| match reference {
        UserReference::Email(email) => Some(normalize_email(email)),
        UserReference::Id { .. } => None,
    }));
    let ids: Vec<i64> = distinct(references.iter().filter_map(|reference| match reference {
        UserReference::Id { id, .. } => *id,
        UserReference::Email(_) => None,
    }));

    debug!(emails = emails.len(), ids = ids.len(), "Resolving users");

    let mut lookups: Vec<LookupFuture<'_, UserRecord>> = Vec::new();
    if !emails.is_empty() {
        lookups.push(lookup.find_users_by_emails(&emails));
    }
    if !ids.is_empty() {
        lookups.push(lookup.find_users_by_ids(&ids));
    }
    let users: Vec<UserRecord> = resolve_by_keys(lookups, |user| user.user_id).await?;

    let mut builder: ResolutionBuilder = ResolutionBuilder::default();
    for reference in &references {
        let matched: Option<i64> = match reference {
            UserReference::Email(email) => {
                let email: String = normalize_email(email);
                users
                    .iter()
                    .find(|user| user.email == email)
                    .map(|user| user.user_id)
            }
            UserReference::Id { id: Some(id), .. } => users
                .iter()
                .find(|user| user.user_id == *id)
                .map(|user| user.user_id),
            UserReference::Id { id: None, .. } => None,
        };
        builder.record(reference.raw(), matched);
    }

    Ok(builder.finish())
}
