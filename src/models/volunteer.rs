//! A volunteer signed up through the site.

use crate::services::store::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, query_builder::Separated, sqlite::Sqlite};
use std::collections::HashMap;

/// Contact record for a volunteer. Email is not required to be unique.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug)]
pub struct Volunteer {
    pub id: i64,
    pub nome: String,
    pub email: Option<String>,
    pub telefone: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct VolunteerFields {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

impl Resource for Volunteer {
    type Fields = VolunteerFields;

    const TABLE: &'static str = "voluntarios";
    const COLUMNS: &'static [&'static str] = &["nome", "email", "telefone"];
    const ACCEPTS_UPLOAD: bool = false;

    const NOT_FOUND_MSG: &'static str = "Voluntário não encontrado";
    const REMOVED_MSG: &'static str = "Voluntário removido com sucesso!";
    const LIST_ERR: &'static str = "Erro ao buscar voluntários";
    const CREATE_ERR: &'static str = "Erro ao criar voluntário";
    const UPDATE_ERR: &'static str = "Erro ao atualizar voluntário";
    const DELETE_ERR: &'static str = "Erro ao excluir voluntário";

    fn fields_from_form(form: &mut HashMap<String, String>, _img: Option<String>) -> Self::Fields {
        VolunteerFields {
            nome: form.remove("nome"),
            email: form.remove("email"),
            telefone: form.remove("telefone"),
        }
    }

    fn push_values(fields: &Self::Fields, out: &mut Separated<'_, '_, Sqlite, &'static str>) {
        out.push_bind(fields.nome.clone());
        out.push_bind(fields.email.clone());
        out.push_bind(fields.telefone.clone());
    }

    fn push_assignments(fields: &Self::Fields, out: &mut Separated<'_, '_, Sqlite, &'static str>) {
        out.push("nome = ").push_bind_unseparated(fields.nome.clone());
        out.push("email = ")
            .push_bind_unseparated(fields.email.clone());
        out.push("telefone = ")
            .push_bind_unseparated(fields.telefone.clone());
    }
}
