#![cfg(test)]

use crate::ConsentError;
use super::utils::*;

#[test]
fn test_verify_unconsented_pair() {
    let ctx = setup();

    assert_eq!(
        ctx.client.verify_consent(&patient(&ctx.env, 1), &trial(&ctx.env, 1)),
        (false, 0, 0)
    );
}

#[test]
fn test_verify_is_scoped_to_pair() {
    let ctx = setup();

    record(&ctx, 1, 1, 1);

    assert_eq!(
        ctx.client.verify_consent(&patient(&ctx.env, 2), &trial(&ctx.env, 1)),
        (false, 0, 0)
    );
    assert_eq!(
        ctx.client.verify_consent(&patient(&ctx.env, 1), &trial(&ctx.env, 2)),
        (false, 0, 0)
    );
}

#[test]
fn test_get_missing_consent_fails() {
    let ctx = setup();

    assert_eq!(ctx.client.try_get_consent(&0), Err(Ok(ConsentError::ConsentNotFound)));
    assert_eq!(ctx.client.try_get_consent(&1), Err(Ok(ConsentError::ConsentNotFound)));

    record(&ctx, 1, 1, 1);
    assert_eq!(ctx.client.try_get_consent(&2), Err(Ok(ConsentError::ConsentNotFound)));
}

#[test]
fn test_reads_are_idempotent() {
    let ctx = setup();
    let p = patient(&ctx.env, 1);
    let t = trial(&ctx.env, 1);

    let consent_id = record(&ctx, 1, 1, 1);

    assert_eq!(ctx.client.verify_consent(&p, &t), ctx.client.verify_consent(&p, &t));
    assert_eq!(ctx.client.get_consent(&consent_id), ctx.client.get_consent(&consent_id));

    ctx.client.revoke_consent(&ctx.operator, &consent_id);

    assert_eq!(ctx.client.verify_consent(&p, &t), ctx.client.verify_consent(&p, &t));
    assert_eq!(ctx.client.get_consent(&consent_id), ctx.client.get_consent(&consent_id));
    assert_eq!(ctx.client.consent_counter(), 1);
}

#[test]
fn test_verify_consent_document() {
    let ctx = setup();
    let p = patient(&ctx.env, 1);
    let t = trial(&ctx.env, 1);

    assert!(!ctx.client.verify_consent_document(&p, &t, &document(&ctx.env, 1)));

    let consent_id = record(&ctx, 1, 1, 1);
    assert!(ctx.client.verify_consent_document(&p, &t, &document(&ctx.env, 1)));
    assert!(!ctx.client.verify_consent_document(&p, &t, &document(&ctx.env, 2)));

    ctx.client.revoke_consent(&ctx.operator, &consent_id);
    assert!(!ctx.client.verify_consent_document(&p, &t, &document(&ctx.env, 1)));
}

#[test]
fn test_verify_consent_document_follows_latest_record() {
    let ctx = setup();
    let p = patient(&ctx.env, 1);
    let t = trial(&ctx.env, 1);

    record(&ctx, 1, 1, 1);
    record(&ctx, 1, 1, 2);

    assert!(!ctx.client.verify_consent_document(&p, &t, &document(&ctx.env, 1)));
    assert!(ctx.client.verify_consent_document(&p, &t, &document(&ctx.env, 2)));
}
