//! Unit tests for mock ticket repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::ticket::{NewTicket, Ticket, TicketStatus};
use crate::domain::entities::user::User;
use crate::repositories::ticket::{MockTicketRepository, TicketRepository};
use crate::repositories::user::{MockUserRepository, UserRepository};

async fn seeded() -> (MockTicketRepository, User) {
    let users = MockUserRepository::new();
    let owner = users
        .create(User::new_citizen(
            "Maria".to_string(),
            "maria@example.com".to_string(),
            "hash".to_string(),
        ))
        .await
        .unwrap();
    (MockTicketRepository::new(users), owner)
}

fn input(category: &str) -> NewTicket {
    NewTicket::new(category, "Descrição longa o bastante", "Rua A, 123", None)
}

#[tokio::test]
async fn test_create_and_find() {
    let (repo, owner) = seeded().await;
    let ticket = Ticket::new(owner.id, input("Buraco"), Utc::now());

    repo.create(ticket.clone()).await.unwrap();

    let found = repo.find_by_id(ticket.id).await.unwrap().unwrap();
    assert_eq!(found, ticket);
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_rejects_unknown_owner() {
    let (repo, _) = seeded().await;
    let orphan = Ticket::new(Uuid::new_v4(), input("Buraco"), Utc::now());

    assert!(repo.create(orphan).await.is_err());
    assert_eq!(repo.len().await, 0);
}

#[tokio::test]
async fn test_listings_are_newest_first() {
    let (repo, owner) = seeded().await;
    let start = Utc::now();

    let older = Ticket::new(owner.id, input("Iluminação"), start);
    let newer = Ticket::new(owner.id, input("Buraco"), start + Duration::seconds(5));
    repo.create(older.clone()).await.unwrap();
    repo.create(newer.clone()).await.unwrap();

    let own = repo.list_by_owner(owner.id).await.unwrap();
    assert_eq!(own.iter().map(|t| t.id).collect::<Vec<_>>(), vec![newer.id, older.id]);

    let all = repo.list_all_with_owner().await.unwrap();
    assert_eq!(all[0].ticket.id, newer.id);
    assert_eq!(all[0].user.email, "maria@example.com");

    assert!(repo.list_by_owner(Uuid::new_v4()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_status() {
    let (repo, owner) = seeded().await;
    let created_at = Utc::now();
    let ticket = Ticket::new(owner.id, input("Buraco"), created_at);
    repo.create(ticket.clone()).await.unwrap();

    let later = created_at + Duration::minutes(3);
    let updated = repo
        .update_status(ticket.id, TicketStatus::Resolvido, later)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, TicketStatus::Resolvido);
    assert_eq!(updated.updated_at, later);
    assert_eq!(updated.created_at, created_at);

    let missing = repo
        .update_status(Uuid::new_v4(), TicketStatus::Pendente, later)
        .await
        .unwrap();
    assert!(missing.is_none());
}
