// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generic structs and raw identifiers.

use entity_sql::{Identifiable, Model};

#[derive(Model)]
#[entity(table = "envelopes")]
pub struct Envelope<T> {
    #[id]
    pub id: String,
    pub r#type: String,
    pub payload: T,
}

fn main() {
    let envelope = Envelope {
        id: "e-1".to_string(),
        r#type: "ping".to_string(),
        payload: 42_u32,
    };
    assert_eq!(envelope.id(), "e-1");

    let decl = <Envelope<u32> as entity_sql::Model>::declaration();
    assert_eq!(decl.fields()[1].name(), "type");
}
