use actix_web::HttpResponse;
use serde_json::json;

/// Handler for GET /: endpoint listing
pub async fn api_index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "name": "GovTech Zeladoria API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": { "path": "/health", "method": "GET" },
            "auth": {
                "register": {
                    "path": "/auth/register",
                    "method": "POST",
                    "request_body": {
                        "name": "string (min 3)",
                        "email": "string (email)",
                        "password": "string (min 6)"
                    }
                },
                "login": {
                    "path": "/auth/login",
                    "method": "POST",
                    "request_body": { "email": "string (email)", "password": "string" }
                }
            },
            "tickets": {
                "create": {
                    "path": "/tickets",
                    "method": "POST",
                    "requires_auth": true,
                    "request_body": {
                        "category": "string (min 3)",
                        "description": "string (min 10)",
                        "address": "string (min 5)",
                        "photoUrl": "string (optional, URL or base64)"
                    }
                },
                "list_own": { "path": "/tickets", "method": "GET", "requires_auth": true },
                "get": { "path": "/tickets/{id}", "method": "GET" }
            },
            "admin": {
                "list": { "path": "/admin/tickets", "method": "GET", "requires_role": "ADMIN" },
                "update_status": {
                    "path": "/admin/tickets/{id}/status",
                    "method": "PATCH",
                    "requires_role": "ADMIN",
                    "request_body": { "status": "PENDENTE | EM_ANALISE | RESOLVIDO" }
                }
            }
        }
    }))
}
