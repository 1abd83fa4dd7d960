use crate::{api::*, ctx::*, utils::*};
use scholarship_payouts::{config::*, error::*, state::*};
use solana_program_test::*;
use solana_sdk::signer::Signer;

pub async fn test_instructions() {
    let (mut ptc, ctx) = get_ptc_and_ctx().await;
    test_initialize(&mut ptc, &ctx).await;
    test_register_university(&mut ptc, &ctx).await;
    test_create_scholarship(&mut ptc, &ctx).await;
    test_set_application_fee(&mut ptc, &ctx).await;
    test_confirm_fee_payment(&mut ptc, &ctx).await;
    test_submit_payout_request(&mut ptc, &ctx).await;
    test_approve_and_mark_paid(&mut ptc, &ctx).await;
    test_reject_payout_request(&mut ptc, &ctx).await;
    test_cancel_payout_request(&mut ptc, &ctx).await;
    test_featured(&mut ptc, &ctx).await;
}

async fn test_initialize(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    initialize(ptc, ctx, DEPENDENT_SURCHARGE).await.unwrap();

    let platform: Platform = fetch(ptc, ctx.platform).await.unwrap();
    assert_eq!(platform.authority, ctx.platform_authority.pubkey());
    assert_eq!(platform.dependent_surcharge, DEPENDENT_SURCHARGE);
    assert_eq!(platform.universities_count, 0);
}

async fn test_register_university(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    for university_authority in &ctx.universities {
        register_university(ptc, ctx, university_authority)
            .await
            .unwrap();
    }

    let university = fetch_university(ptc, ctx.universities[1].pubkey())
        .await
        .unwrap();
    assert_eq!(university.authority, ctx.universities[1].pubkey());
    assert_eq!(university.id, 1);
    assert_eq!(university.revenue_sum, 0);
    assert!(university.open_requests.is_empty());

    let platform: Platform = fetch(ptc, ctx.platform).await.unwrap();
    assert_eq!(platform.universities_count, 2);
}

async fn test_create_scholarship(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    let id = create_scholarship(ptc, &ctx.universities[0], 30_000)
        .await
        .unwrap();
    assert_eq!(id, 0);

    let university = find_university(ctx.universities[0].pubkey());
    let scholarship: Scholarship = fetch(ptc, find_scholarship(university, 0)).await.unwrap();
    assert_eq!(scholarship.university, university);
    assert_eq!(scholarship.application_fee, 30_000);
    assert!(!scholarship.is_highlighted);

    let university = fetch_university(ptc, ctx.universities[0].pubkey())
        .await
        .unwrap();
    assert_eq!(university.scholarships_count, 1);
}

async fn test_set_application_fee(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    let university = find_university(ctx.universities[0].pubkey());
    set_application_fee(
        ptc,
        &ctx.universities[0],
        find_scholarship(university, 0),
        35_000,
    )
    .await
    .unwrap();

    let scholarship: Scholarship = fetch(ptc, find_scholarship(university, 0)).await.unwrap();
    assert_eq!(scholarship.application_fee, 35_000);

    // another university cannot touch it
    refresh_blockhash(ptc).await;
    let result = set_application_fee(
        ptc,
        &ctx.universities[1],
        find_scholarship(university, 0),
        1,
    )
    .await;
    assert!(result.is_err());
    let scholarship: Scholarship = fetch(ptc, find_scholarship(university, 0)).await.unwrap();
    assert_eq!(scholarship.application_fee, 35_000);
}

async fn test_confirm_fee_payment(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    let university = find_university(ctx.universities[0].pubkey());
    let scholarship = find_scholarship(university, 0);

    for (student, dependent_count) in [(0, 2), (1, 0), (2, 1)] {
        record_application_fee(
            ptc,
            ctx,
            scholarship,
            ctx.students[student].pubkey(),
            dependent_count,
        )
        .await
        .unwrap();
    }

    let fee: ApplicationFee = fetch(
        ptc,
        find_application_fee(scholarship, ctx.students[0].pubkey()),
    )
    .await
    .unwrap();
    assert_eq!(fee.fee_amount, 35_000);
    assert_eq!(fee.dependent_count, 2);
    assert!(!fee.is_paid);

    // unpaid checkouts are not revenue
    let state = fetch_university(ptc, ctx.universities[0].pubkey())
        .await
        .unwrap();
    assert_eq!(state.balance().total_revenue, 0);

    for student in [0, 1] {
        confirm_fee_payment(ptc, ctx, university, scholarship, ctx.students[student].pubkey())
            .await
            .unwrap();
    }

    let fee: ApplicationFee = fetch(
        ptc,
        find_application_fee(scholarship, ctx.students[0].pubkey()),
    )
    .await
    .unwrap();
    assert!(fee.is_paid);

    let state = fetch_university(ptc, ctx.universities[0].pubkey())
        .await
        .unwrap();
    assert_eq!(state.revenue_sum, 35_200 + 35_000);

    refresh_blockhash(ptc).await;
    let result =
        confirm_fee_payment(ptc, ctx, university, scholarship, ctx.students[0].pubkey()).await;
    assert!(is_custom_error(&result, code(ScholarshipError::FeeAlreadyPaid)));

    let state = fetch_university(ptc, ctx.universities[0].pubkey())
        .await
        .unwrap();
    assert_eq!(state.revenue_sum, 70_200);
}

async fn test_submit_payout_request(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    let authority = &ctx.universities[0];

    let result = submit_payout_request(
        ptc,
        authority,
        0,
        PayoutMethod::Zelle,
        zelle_details("bursar@uni.edu"),
    )
    .await
    .map(|_| ());
    assert!(is_custom_error(&result, code(ScholarshipError::InvalidAmount)));

    let result = submit_payout_request(
        ptc,
        authority,
        70_201,
        PayoutMethod::Zelle,
        zelle_details("bursar@uni.edu"),
    )
    .await
    .map(|_| ());
    assert!(is_custom_error(&result, code(ScholarshipError::InsufficientBalance)));

    let ambiguous = PayoutDetails {
        zelle_phone: Some("+15550100".into()),
        ..zelle_details("bursar@uni.edu")
    };
    let result = submit_payout_request(ptc, authority, 1_000, PayoutMethod::Zelle, ambiguous)
        .await
        .map(|_| ());
    assert!(is_custom_error(&result, code(ScholarshipError::ZelleContactAmbiguous)));

    let result = submit_payout_request(
        ptc,
        authority,
        1_000,
        PayoutMethod::BankTransfer,
        zelle_details("bursar@uni.edu"),
    )
    .await
    .map(|_| ());
    assert!(is_custom_error(&result, code(ScholarshipError::BankDetailsMissing)));

    let id = submit_payout_request(
        ptc,
        authority,
        20_000,
        PayoutMethod::Zelle,
        zelle_details("bursar@uni.edu"),
    )
    .await
    .unwrap();
    assert_eq!(id, 0);

    let id = submit_payout_request(
        ptc,
        authority,
        30_000,
        PayoutMethod::BankTransfer,
        bank_details(),
    )
    .await
    .unwrap();
    assert_eq!(id, 1);

    let university = find_university(authority.pubkey());
    let request = fetch_payout_request(ptc, university, 1).await.unwrap();
    assert_eq!(request.amount, 30_000);
    assert_eq!(request.method, PayoutMethod::BankTransfer);
    assert_eq!(request.details, bank_details());
    assert_eq!(request.status, PayoutStatus::Pending);
    assert_eq!(request.requested_by, authority.pubkey());

    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(
        state.open_requests,
        [
            PayoutRecord {
                id: 0,
                amount: 20_000,
                status: PayoutStatus::Pending,
            },
            PayoutRecord {
                id: 1,
                amount: 30_000,
                status: PayoutStatus::Pending,
            }
        ]
    );
    assert_eq!(state.balance().available_balance, 70_200 - 50_000);
}

async fn test_approve_and_mark_paid(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    let university = find_university(ctx.universities[0].pubkey());

    // paying before approval is refused
    let result = mark_payout_paid(ptc, ctx, university, 0).await;
    assert!(is_custom_error(&result, code(ScholarshipError::InvalidStatusTransition)));

    approve_payout_request(ptc, ctx, university, 0).await.unwrap();
    let request = fetch_payout_request(ptc, university, 0).await.unwrap();
    assert_eq!(request.status, PayoutStatus::Approved);

    refresh_blockhash(ptc).await;
    let result = approve_payout_request(ptc, ctx, university, 0).await;
    assert!(is_custom_error(&result, code(ScholarshipError::InvalidStatusTransition)));

    refresh_blockhash(ptc).await;
    mark_payout_paid(ptc, ctx, university, 0).await.unwrap();
    let request = fetch_payout_request(ptc, university, 0).await.unwrap();
    assert_eq!(request.status, PayoutStatus::Paid);

    let state = fetch_university(ptc, ctx.universities[0].pubkey())
        .await
        .unwrap();
    assert_eq!(state.paid_out_sum, 20_000);
    assert_eq!(state.open_requests.len(), 1);
    assert_eq!(state.balance().reserved, 50_000);
    assert_eq!(state.balance().available_balance, 20_200);
}

async fn test_reject_payout_request(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    let university = find_university(ctx.universities[0].pubkey());

    let notes = "x".repeat(MAX_ADMIN_NOTES_LEN + 1);
    let result = reject_payout_request(ptc, ctx, university, 1, Some(notes)).await;
    assert!(is_custom_error(&result, code(ScholarshipError::AdminNotesTooLong)));

    reject_payout_request(
        ptc,
        ctx,
        university,
        1,
        Some("Routing number does not match bank".into()),
    )
    .await
    .unwrap();

    let request = fetch_payout_request(ptc, university, 1).await.unwrap();
    assert_eq!(request.status, PayoutStatus::Rejected);
    assert_eq!(
        request.admin_notes.as_deref(),
        Some("Routing number does not match bank")
    );

    let state = fetch_university(ptc, ctx.universities[0].pubkey())
        .await
        .unwrap();
    assert!(state.open_requests.is_empty());
    assert_eq!(state.balance().available_balance, 50_200);

    let result = reject_payout_request(ptc, ctx, university, 0, None).await;
    assert!(is_custom_error(&result, code(ScholarshipError::InvalidStatusTransition)));
}

async fn test_cancel_payout_request(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    let authority = &ctx.universities[0];
    let university = find_university(authority.pubkey());

    let id = submit_payout_request(
        ptc,
        authority,
        10_000,
        PayoutMethod::Stripe,
        PayoutDetails {
            stripe_email: Some("finance@uni.edu".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(state.balance().available_balance, 40_200);

    // only the requesting university may cancel
    let result =
        cancel_payout_request(ptc, &ctx.universities[1], find_payout_request(university, id)).await;
    assert!(result.is_err());

    cancel_payout_request(ptc, authority, find_payout_request(university, id))
        .await
        .unwrap();
    let request = fetch_payout_request(ptc, university, id).await.unwrap();
    assert_eq!(request.status, PayoutStatus::Cancelled);

    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(state.balance().available_balance, 50_200);

    // approved requests can no longer be cancelled
    let id = submit_payout_request(
        ptc,
        authority,
        5_000,
        PayoutMethod::Zelle,
        zelle_details("bursar@uni.edu"),
    )
    .await
    .unwrap();
    approve_payout_request(ptc, ctx, university, id).await.unwrap();
    let result = cancel_payout_request(ptc, authority, find_payout_request(university, id)).await;
    assert!(is_custom_error(&result, code(ScholarshipError::InvalidStatusTransition)));

    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(state.balance().available_balance, 45_200);
}

async fn test_featured(ptc: &mut ProgramTestContext, ctx: &Ctx) {
    let authority = &ctx.universities[0];
    let university = find_university(authority.pubkey());
    for _ in 0..FEATURED_CAPACITY {
        create_scholarship(ptc, authority, 10_000).await.unwrap();
    }

    for id in 0..FEATURED_CAPACITY as u16 {
        highlight_scholarship(ptc, authority, id).await.unwrap();
    }
    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(state.featured, [0, 1, 2, 3, 4, 5]);
    assert_eq!(state.featured_order(3), Some(4));

    let seventh = FEATURED_CAPACITY as u16;
    let result = highlight_scholarship(ptc, authority, seventh).await;
    assert!(is_custom_error(&result, code(ScholarshipError::CapacityExceeded)));
    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(state.featured, [0, 1, 2, 3, 4, 5]);
    let scholarship: Scholarship = fetch(ptc, find_scholarship(university, seventh))
        .await
        .unwrap();
    assert!(!scholarship.is_highlighted);

    reorder_featured(ptc, authority, 0, Direction::Up).await.unwrap();
    reorder_featured(ptc, authority, 5, Direction::Down).await.unwrap();
    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(state.featured, [0, 1, 2, 3, 4, 5]);

    reorder_featured(ptc, authority, 3, Direction::Up).await.unwrap();
    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(state.featured, [0, 1, 3, 2, 4, 5]);

    unhighlight_scholarship(ptc, authority, 1).await.unwrap();
    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(state.featured, [0, 3, 2, 4, 5]);
    assert_eq!(state.featured_order(1), None);
    let scholarship: Scholarship = fetch(ptc, find_scholarship(university, 1)).await.unwrap();
    assert!(!scholarship.is_highlighted);

    refresh_blockhash(ptc).await;
    highlight_scholarship(ptc, authority, seventh).await.unwrap();
    let state = fetch_university(ptc, authority.pubkey()).await.unwrap();
    assert_eq!(state.featured_order(seventh), Some(6));
    let scholarship: Scholarship = fetch(ptc, find_scholarship(university, seventh))
        .await
        .unwrap();
    assert!(scholarship.is_highlighted);
}
