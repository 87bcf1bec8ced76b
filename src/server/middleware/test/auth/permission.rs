use super::*;

/// Tests the admin permission.
///
/// Expected: granted only to admins
#[test]
fn admin_requires_admin_role() {
    assert!(Permission::Admin.is_granted(&user_caller(1, Role::Admin)));
    assert!(!Permission::Admin.is_granted(&user_caller(1, Role::BookingManager)));
    assert!(!Permission::Admin.is_granted(&user_caller(1, Role::Coach)));
    assert!(!Permission::Admin.is_granted(&client_caller("5550001")));
}

/// Tests booking management is shared by admins and booking managers.
#[test]
fn manage_bookings_for_admin_and_booking_manager() {
    let permission = Permission::ManageBookings;

    assert!(permission.is_granted(&user_caller(1, Role::Admin)));
    assert!(permission.is_granted(&user_caller(2, Role::BookingManager)));
    assert!(!permission.is_granted(&user_caller(3, Role::Player)));
    assert!(!permission.is_granted(&client_caller("5550001")));
}

/// Tests the coach permission is bound to one coach id.
///
/// Verifies a different coach, and an admin with the matching id, are both denied.
#[test]
fn coach_must_match_id() {
    let permission = Permission::Coach(7);

    assert!(permission.is_granted(&user_caller(7, Role::Coach)));
    assert!(!permission.is_granted(&user_caller(8, Role::Coach)));
    assert!(!permission.is_granted(&user_caller(7, Role::Admin)));
}

#[test]
fn player_requires_player_role() {
    assert!(Permission::Player.is_granted(&user_caller(1, Role::Player)));
    assert!(!Permission::Player.is_granted(&user_caller(1, Role::Coach)));
    assert!(!Permission::Player.is_granted(&client_caller("5550001")));
}

/// Tests acting for a client.
///
/// Verifies the client themself and booking staff are granted, while another client
/// and a player are not.
#[test]
fn client_or_staff() {
    let permission = Permission::ClientOrStaff("5550001".to_string());

    assert!(permission.is_granted(&client_caller("5550001")));
    assert!(permission.is_granted(&user_caller(1, Role::Admin)));
    assert!(permission.is_granted(&user_caller(2, Role::BookingManager)));
    assert!(!permission.is_granted(&client_caller("5550002")));
    assert!(!permission.is_granted(&user_caller(3, Role::Player)));
}

/// Tests that every listed permission must hold.
///
/// Expected: Err(AccessDenied) naming the caller and the first failed permission
#[test]
fn authorize_reports_first_denied_permission() {
    let caller = client_caller("5550001");

    assert!(authorize(&caller, &[]).is_ok());

    let result = authorize(
        &caller,
        &[
            Permission::ClientOrStaff("5550001".to_string()),
            Permission::ClientOrStaff("5550002".to_string()),
        ],
    );

    match result {
        Err(AuthError::AccessDenied(subject, message)) => {
            assert_eq!(subject, "client 5550001");
            assert!(message.contains("5550002"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }
}
