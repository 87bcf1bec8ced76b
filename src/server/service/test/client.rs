use super::*;
use crate::server::{
    model::client::{RegisterClientParams, UpdateClientParams},
    service::client::ClientService,
};

fn register_params(phone_number: &str) -> RegisterClientParams {
    RegisterClientParams {
        phone_number: phone_number.to_string(),
        first_name: "Martina".to_string(),
        last_name: "Hingis".to_string(),
        password: "client-password".to_string(),
    }
}

/// Tests registering a client and logging in with phone and password.
///
/// Expected: Ok(Client) from login, InvalidCredentials for a wrong password
#[tokio::test]
async fn registers_and_logs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ClientService::new(db);
    service.register(register_params("5551234567")).await?;

    let client = service.login("5551234567", "client-password").await?;
    assert_eq!(client.first_name, "Martina");

    let wrong = service.login("5551234567", "nope").await;
    assert!(matches!(
        wrong,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests registering the same phone number twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ClientService::new(db);
    service.register(register_params("5551234567")).await?;
    let result = service.register(register_params("5551234567")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a client's names.
#[tokio::test]
async fn updates_names() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_client(db).await?;

    let service = ClientService::new(db);
    let updated = service
        .update(UpdateClientParams {
            phone_number: existing.phone_number.clone(),
            first_name: "Steffi".to_string(),
            last_name: "Graf".to_string(),
        })
        .await?;

    assert_eq!(updated.first_name, "Steffi");
    assert_eq!(updated.last_name, "Graf");
    assert_eq!(updated.phone_number, existing.phone_number);

    Ok(())
}

/// Tests removing a client takes their reservations with them.
///
/// Expected: Ok, client gone, court has no reservations left
#[tokio::test]
async fn delete_removes_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let court = factory::create_court(db).await?;
    factory::create_reservation(db, &client.phone_number, court.id, at(10, 0)).await?;

    let service = ClientService::new(db);
    service.delete(&client.phone_number).await?;

    assert!(matches!(
        service.get(&client.phone_number).await,
        Err(AppError::NotFound(_))
    ));

    let remaining = crate::server::data::reservation::ReservationRepository::new(db)
        .count_for_court(court.id)
        .await?;
    assert_eq!(remaining, 0);

    Ok(())
}
