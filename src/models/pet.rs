//! A pet available for adoption.

use crate::services::store::Resource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, query_builder::Separated, sqlite::Sqlite};
use std::collections::HashMap;

/// An adoptable animal. `idade` is free text ("2 anos", "6 meses"), like
/// the rest of the form fields.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug)]
pub struct Pet {
    pub id: i64,
    pub nome: String,
    pub sexo: Option<String>,
    pub idade: Option<String>,
    pub especie: Option<String>,
    pub img: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct PetFields {
    pub nome: Option<String>,
    pub sexo: Option<String>,
    pub idade: Option<String>,
    pub especie: Option<String>,
    pub img: Option<String>,
}

impl Resource for Pet {
    type Fields = PetFields;

    const TABLE: &'static str = "pets";
    const COLUMNS: &'static [&'static str] = &["nome", "sexo", "idade", "especie", "img"];
    const ACCEPTS_UPLOAD: bool = true;

    const NOT_FOUND_MSG: &'static str = "Pet não encontrado";
    const REMOVED_MSG: &'static str = "Pet removido com sucesso!";
    const LIST_ERR: &'static str = "Erro ao buscar pets";
    const CREATE_ERR: &'static str = "Erro ao criar pet";
    const UPDATE_ERR: &'static str = "Erro ao atualizar pet";
    const DELETE_ERR: &'static str = "Erro ao excluir pet";

    fn fields_from_form(form: &mut HashMap<String, String>, img: Option<String>) -> Self::Fields {
        PetFields {
            nome: form.remove("nome"),
            sexo: form.remove("sexo"),
            idade: form.remove("idade"),
            especie: form.remove("especie"),
            img,
        }
    }

    fn push_values(fields: &Self::Fields, out: &mut Separated<'_, '_, Sqlite, &'static str>) {
        out.push_bind(fields.nome.clone());
        out.push_bind(fields.sexo.clone());
        out.push_bind(fields.idade.clone());
        out.push_bind(fields.especie.clone());
        out.push_bind(fields.img.clone());
    }

    fn push_assignments(fields: &Self::Fields, out: &mut Separated<'_, '_, Sqlite, &'static str>) {
        out.push("nome = ").push_bind_unseparated(fields.nome.clone());
        out.push("sexo = ").push_bind_unseparated(fields.sexo.clone());
        out.push("idade = ")
            .push_bind_unseparated(fields.idade.clone());
        out.push("especie = ")
            .push_bind_unseparated(fields.especie.clone());
        out.push("img = ").push_bind_unseparated(fields.img.clone());
    }
}
