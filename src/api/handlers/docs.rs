//! Handler for the API description endpoint.

use axum::Json;
use serde_json::{Value, json};
use std::sync::LazyLock;

/// OpenAPI 3.0 description of the public surface.
static OPENAPI: LazyLock<Value> = LazyLock::new(|| {
    let error = json!({ "$ref": "#/components/schemas/Error" });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Article Summarizer API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Service metadata",
                    "responses": { "200": { "description": "Name, version and endpoint map" } }
                }
            },
            "/health": {
                "get": {
                    "summary": "Process liveness, independent of the automation engine",
                    "responses": {
                        "200": {
                            "description": "Process is ready",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Health" } } }
                        }
                    }
                }
            },
            "/submit": {
                "post": {
                    "summary": "Validate an article submission and forward it to the automation engine",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/SubmitRequest" } } }
                    },
                    "responses": {
                        "202": {
                            "description": "Engine acknowledged the submission",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/SubmitResponse" } } }
                        },
                        "400": { "description": "Invalid url or email; nothing forwarded", "content": { "application/json": { "schema": error.clone() } } },
                        "500": { "description": "Unexpected internal failure", "content": { "application/json": { "schema": error.clone() } } },
                        "502": { "description": "Engine rejected the call or was unreachable", "content": { "application/json": { "schema": error.clone() } } },
                        "504": { "description": "Engine did not answer in time", "content": { "application/json": { "schema": error } } }
                    }
                }
            },
            "/docs": {
                "get": {
                    "summary": "This document",
                    "responses": { "200": { "description": "OpenAPI description" } }
                }
            }
        },
        "components": {
            "schemas": {
                "SubmitRequest": {
                    "type": "object",
                    "required": ["url", "email"],
                    "properties": {
                        "url": { "type": "string", "format": "uri", "description": "Absolute http(s) article URL" },
                        "email": { "type": "string", "format": "email" }
                    }
                },
                "SubmitResponse": {
                    "type": "object",
                    "properties": {
                        "success": { "type": "boolean" },
                        "message": { "type": "string" },
                        "correlation_id": { "type": "string", "format": "uuid" },
                        "latency_ms": { "type": "integer" }
                    }
                },
                "Health": {
                    "type": "object",
                    "properties": {
                        "ready": { "type": "boolean" },
                        "status": { "type": "string" },
                        "version": { "type": "string" },
                        "timestamp": { "type": "string", "format": "date-time" }
                    }
                },
                "Error": {
                    "type": "object",
                    "properties": {
                        "error": {
                            "type": "object",
                            "properties": {
                                "code": {
                                    "type": "string",
                                    "enum": [
                                        "validation_error",
                                        "downstream_rejected",
                                        "downstream_timeout",
                                        "downstream_unreachable",
                                        "internal_error"
                                    ]
                                },
                                "message": { "type": "string" },
                                "details": { "type": "object" }
                            }
                        }
                    }
                }
            }
        }
    })
});

/// Returns the OpenAPI description.
///
/// # Endpoint
///
/// `GET /docs`
pub async fn docs_handler() -> Json<Value> {
    Json(OPENAPI.clone())
}
