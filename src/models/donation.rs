//! A donation item listed on the charity site.

use crate::services::store::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, query_builder::Separated, sqlite::Sqlite};
use std::collections::HashMap;

/// A donated good offered on the site, optionally with a photo.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug)]
pub struct Donation {
    pub id: i64,

    pub nome: String,

    pub descricao: Option<String>,

    /// Monetary amount, kept as the literal text the client sent
    /// (e.g. `"R$ 35.00"`).
    pub preco: Option<String>,

    /// Relative `/uploads/...` path of the photo, if one was attached.
    /// Never checked for existence.
    pub img: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Editable fields. All optional: presence of `nome` is enforced by the
/// table, not here.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct DonationFields {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub preco: Option<String>,
    pub img: Option<String>,
}

impl Resource for Donation {
    type Fields = DonationFields;

    const TABLE: &'static str = "doacoes";
    const COLUMNS: &'static [&'static str] = &["nome", "descricao", "preco", "img"];
    const ACCEPTS_UPLOAD: bool = true;

    const NOT_FOUND_MSG: &'static str = "Doação não encontrada";
    const REMOVED_MSG: &'static str = "Doação removida com sucesso!";
    const LIST_ERR: &'static str = "Erro ao buscar doações";
    const CREATE_ERR: &'static str = "Erro ao criar doação";
    const UPDATE_ERR: &'static str = "Erro ao atualizar doação";
    const DELETE_ERR: &'static str = "Erro ao excluir doação";

    fn fields_from_form(form: &mut HashMap<String, String>, img: Option<String>) -> Self::Fields {
        DonationFields {
            nome: form.remove("nome"),
            descricao: form.remove("descricao"),
            preco: form.remove("preco"),
            img,
        }
    }

    fn push_values(fields: &Self::Fields, out: &mut Separated<'_, '_, Sqlite, &'static str>) {
        out.push_bind(fields.nome.clone());
        out.push_bind(fields.descricao.clone());
        out.push_bind(fields.preco.clone());
        out.push_bind(fields.img.clone());
    }

    fn push_assignments(fields: &Self::Fields, out: &mut Separated<'_, '_, Sqlite, &'static str>) {
        out.push("nome = ").push_bind_unseparated(fields.nome.clone());
        out.push("descricao = ")
            .push_bind_unseparated(fields.descricao.clone());
        out.push("preco = ")
            .push_bind_unseparated(fields.preco.clone());
        out.push("img = ").push_bind_unseparated(fields.img.clone());
    }
}
