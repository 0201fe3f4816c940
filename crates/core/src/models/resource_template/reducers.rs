// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::ResourceTemplateState;
use super::actions::{
    AddFaqItemInput, AddPresetOptionInput, DeleteFaqItemInput, RemoveFacetPresetInput,
    RemovePresetOptionInput, ReorderFaqItemsInput, SetFacetPresetInput, UpdateFaqItemInput,
    UpdateTemplateInfoInput,
};
use super::codes;
use crate::error::ReducerError;
use crate::list::{next_display_order, remove_by, reorder_by, upsert_by};
use crate::outcome::{NoOp, Outcome};
use resource_services_domain::{FacetPreset, FaqItem};

fn find_preset<'a>(
    state: &'a mut ResourceTemplateState,
    category_key: &str,
    code: &'static str,
) -> Result<&'a mut FacetPreset, ReducerError> {
    state
        .facet_presets
        .iter_mut()
        .find(|preset| preset.category_key == category_key)
        .ok_or_else(|| {
            ReducerError::new(
                code,
                format!("Facet preset with category key {category_key} not found"),
            )
        })
}

// Template info

pub fn update_template_info(
    state: &mut ResourceTemplateState,
    input: &UpdateTemplateInfoInput,
) -> Outcome {
    if let Some(title) = &input.title {
        state.title.clone_from(title);
    }
    if let Some(summary) = &input.summary {
        state.summary.clone_from(summary);
    }
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

// FAQ

pub fn add_faq_item(
    state: &mut ResourceTemplateState,
    input: &AddFaqItemInput,
) -> Result<Outcome, ReducerError> {
    if state.faq_item(&input.id).is_some() {
        return Err(ReducerError::new(
            codes::DUPLICATE_FAQ_ID,
            format!("FAQ item with ID {} already exists", input.id),
        ));
    }
    let display_order: i64 = input
        .display_order
        .unwrap_or_else(|| next_display_order(&state.faq_fields));
    state.faq_fields.push(FaqItem {
        id: input.id.clone(),
        question: input.question.clone(),
        answer: input.answer.clone(),
        display_order,
    });
    state.last_modified.clone_from(&input.last_modified);
    Ok(Outcome::Applied)
}

pub fn update_faq_item(
    state: &mut ResourceTemplateState,
    input: &UpdateFaqItemInput,
) -> Result<Outcome, ReducerError> {
    let item: &mut FaqItem = state
        .faq_fields
        .iter_mut()
        .find(|item| item.id == input.id)
        .ok_or_else(|| {
            ReducerError::new(
                codes::FAQ_NOT_FOUND,
                format!("FAQ item with ID {} not found", input.id),
            )
        })?;
    if input.question.is_some() {
        item.question.clone_from(&input.question);
    }
    if input.answer.is_some() {
        item.answer.clone_from(&input.answer);
    }
    if let Some(display_order) = input.display_order {
        item.display_order = display_order;
    }
    state.last_modified.clone_from(&input.last_modified);
    Ok(Outcome::Applied)
}

pub fn delete_faq_item(
    state: &mut ResourceTemplateState,
    input: &DeleteFaqItemInput,
) -> Result<Outcome, ReducerError> {
    remove_by(&mut state.faq_fields, |item| item.id == input.id).ok_or_else(|| {
        ReducerError::new(
            codes::DELETE_FAQ_NOT_FOUND,
            format!("FAQ item with ID {} not found", input.id),
        )
    })?;
    state.last_modified.clone_from(&input.last_modified);
    Ok(Outcome::Applied)
}

pub fn reorder_faq_items(
    state: &mut ResourceTemplateState,
    input: &ReorderFaqItemsInput,
) -> Outcome {
    reorder_by(
        &mut state.faq_fields,
        &input.faq_ids,
        |item| &item.id,
        |item, position| item.display_order = position,
    );
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

// Facet presets

pub fn set_facet_preset(state: &mut ResourceTemplateState, input: &SetFacetPresetInput) -> Outcome {
    let preset: FacetPreset = FacetPreset {
        category_key: input.category_key.clone(),
        category_label: input.category_label.clone(),
        selected_options: input.selected_options.clone(),
    };
    upsert_by(&mut state.facet_presets, preset, |preset| {
        preset.category_key.as_str()
    });
    state.last_modified.clone_from(&input.last_modified);
    Outcome::Applied
}

pub fn remove_facet_preset(
    state: &mut ResourceTemplateState,
    input: &RemoveFacetPresetInput,
) -> Result<Outcome, ReducerError> {
    remove_by(&mut state.facet_presets, |preset| {
        preset.category_key == input.category_key
    })
    .ok_or_else(|| {
        ReducerError::new(
            codes::FACET_PRESET_NOT_FOUND,
            format!(
                "Facet preset with category key {} not found",
                input.category_key
            ),
        )
    })?;
    state.last_modified.clone_from(&input.last_modified);
    Ok(Outcome::Applied)
}

/// Adding an option the preset already selects changes nothing.
pub fn add_preset_option(
    state: &mut ResourceTemplateState,
    input: &AddPresetOptionInput,
) -> Result<Outcome, ReducerError> {
    let preset: &mut FacetPreset = find_preset(
        state,
        &input.category_key,
        codes::ADD_PRESET_OPTION_NOT_FOUND,
    )?;
    if preset.selected_options.contains(&input.option_id) {
        return Ok(Outcome::Ignored(NoOp::duplicate(
            "preset option",
            &input.option_id,
        )));
    }
    preset.selected_options.push(input.option_id.clone());
    state.last_modified.clone_from(&input.last_modified);
    Ok(Outcome::Applied)
}

pub fn remove_preset_option(
    state: &mut ResourceTemplateState,
    input: &RemovePresetOptionInput,
) -> Result<Outcome, ReducerError> {
    let preset: &mut FacetPreset = find_preset(
        state,
        &input.category_key,
        codes::REMOVE_PRESET_OPTION_NOT_FOUND,
    )?;
    remove_by(&mut preset.selected_options, |option| {
        option == &input.option_id
    })
    .ok_or_else(|| {
        ReducerError::new(
            codes::REMOVE_PRESET_OPTION_NOT_FOUND,
            format!(
                "Option {} is not selected in facet preset {}",
                input.option_id, input.category_key
            ),
        )
    })?;
    state.last_modified.clone_from(&input.last_modified);
    Ok(Outcome::Applied)
}
