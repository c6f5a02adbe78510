//! Unit tests for ticket entity

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::ticket::{NewTicket, Ticket, TicketOwner, TicketStatus, TicketWithOwner};
use crate::errors::DomainError;

fn pothole() -> NewTicket {
    NewTicket::new(
        "Buraco",
        "Buraco grande na rua",
        "Rua A, 123",
        None,
    )
}

#[test]
fn test_new_ticket_starts_pending() {
    let owner = Uuid::new_v4();
    let now = Utc::now();
    let ticket = Ticket::new(owner, pothole(), now);

    assert_eq!(ticket.status, TicketStatus::Pendente);
    assert!(ticket.is_owned_by(owner));
    assert_eq!(ticket.created_at, now);
    assert_eq!(ticket.updated_at, now);
}

#[test]
fn test_any_status_can_follow_any_status() {
    let start = Utc::now();
    let mut ticket = Ticket::new(Uuid::new_v4(), pothole(), start);

    let mut now = start;
    for from in TicketStatus::ALL {
        for to in TicketStatus::ALL {
            ticket.set_status(from, now);
            now += Duration::seconds(1);
            ticket.set_status(to, now);
            assert_eq!(ticket.status, to);
            assert_eq!(ticket.updated_at, now);
        }
    }
    assert_eq!(ticket.created_at, start);
}

#[test]
fn test_status_wire_format() {
    assert_eq!(
        serde_json::to_string(&TicketStatus::EmAnalise).unwrap(),
        "\"EM_ANALISE\""
    );
    assert_eq!("RESOLVIDO".parse::<TicketStatus>().unwrap(), TicketStatus::Resolvido);
    assert!(matches!(
        "resolvido".parse::<TicketStatus>(),
        Err(DomainError::Validation { .. })
    ));
    assert!("CLOSED".parse::<TicketStatus>().is_err());
}

#[test]
fn test_ticket_serializes_camel_case() {
    let ticket = Ticket::new(Uuid::new_v4(), pothole(), Utc::now());
    let json = serde_json::to_value(&ticket).unwrap();

    assert_eq!(json["status"], "PENDENTE");
    assert!(json.get("userId").is_some());
    assert!(json.get("createdAt").is_some());
    assert!(json.get("photoUrl").is_some());
}

#[test]
fn test_ticket_with_owner_flattens() {
    let ticket = Ticket::new(Uuid::new_v4(), pothole(), Utc::now());
    let joined = TicketWithOwner {
        ticket: ticket.clone(),
        user: TicketOwner {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
        },
    };

    let json = serde_json::to_value(&joined).unwrap();
    assert_eq!(json["id"], ticket.id.to_string());
    assert_eq!(json["user"]["name"], "Maria");
}

#[test]
fn test_validation_minimum_lengths() {
    assert!(pothole().validated().is_ok());

    let short_category = NewTicket::new("Bu", "Buraco grande na rua", "Rua A, 123", None);
    assert!(matches!(
        short_category.validated(),
        Err(DomainError::Validation { .. })
    ));

    let short_description = NewTicket::new("Buraco", "Buraco", "Rua A, 123", None);
    assert!(short_description.validated().is_err());

    let short_address = NewTicket::new("Buraco", "Buraco grande na rua", "Rua", None);
    assert!(short_address.validated().is_err());
}

#[test]
fn test_validation_counts_characters_not_bytes() {
    // "Poço" is four characters but five bytes
    let input = NewTicket::new("Poço", "Água parada há dias", "Praça", None);
    assert!(input.validated().is_ok());
}

#[test]
fn test_blank_photo_is_dropped() {
    let input = NewTicket::new("Buraco", "Buraco grande na rua", "Rua A, 123", Some("  ".to_string()));
    assert_eq!(input.validated().unwrap().photo_url, None);

    let input = NewTicket::new(
        "Buraco",
        "Buraco grande na rua",
        "Rua A, 123",
        Some("https://img.example.com/1.jpg".to_string()),
    );
    assert!(input.validated().unwrap().photo_url.is_some());
}
