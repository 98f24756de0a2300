use crate::{
    customize::CustomizationHolder,
    model::{Entity, ForeignKey, Links, ResolutionStage, TableName},
    naming::eq_ignore_case,
    obs::{Diagnostic, DiagnosticKind, DiagnosticSink, emit},
    resolve::{ResolveContext, ResolveError},
};

/// Pass 1: naming, table mapping, keys, and the default visible/searchable
/// sets. Default rules append synthesized patches to `holder`, so pass 2
/// sees them exactly like user customizations.
pub fn resolve_identity(
    entity: &mut Entity,
    holder: &mut CustomizationHolder,
    ctx: &ResolveContext,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ResolveError> {
    if entity.stage != ResolutionStage::Unresolved {
        return Err(ResolveError::StageOrder {
            entity: entity.name.clone(),
            expected: ResolutionStage::Unresolved,
            found: entity.stage,
        });
    }

    apply_entity_patch(entity, holder, ctx);

    // Phase 1: keys. Flags are copied before the display/search defaults run
    // so selectors can tell key columns apart.
    apply_default_key(entity, holder);
    apply_key_flags(entity, holder, sink);

    // Phase 2: default visible / searchable sets.
    apply_default_display(entity, holder, ctx);
    apply_default_search(entity, holder, ctx);

    // Phase 3: foreign-key targets (names only; linking is pass 2).
    attach_foreign_keys(entity, holder);

    if !entity.has_key() {
        emit(sink, Diagnostic::entity(&entity.name, DiagnosticKind::MissingKey));
    }

    entity.stage = ResolutionStage::IdentityResolved;
    tracing::debug!(entity = %entity.name, table = %entity.table.qualified(), "identity resolved");

    Ok(())
}

fn apply_entity_patch(entity: &mut Entity, holder: &CustomizationHolder, ctx: &ResolveContext) {
    let patch = holder.entity_patch();

    entity.table = match non_empty(patch.table.as_ref()) {
        Some(table) => TableName {
            name: table,
            schema: non_empty(patch.schema.as_ref()).or_else(|| ctx.config.default_schema.clone()),
        },
        None => TableName {
            name: ctx.default_table_name(&entity.name),
            schema: non_empty(patch.schema.as_ref()),
        },
    };

    if let Some(singular) = non_empty(patch.singular.as_ref()) {
        entity.verbose.singular = singular;
    }
    if let Some(plural) = non_empty(patch.plural.as_ref()) {
        entity.verbose.plural = plural;
    }
    if let Some(group) = non_empty(patch.group.as_ref()) {
        entity.verbose.group = Some(group);
    }

    entity.record_display_format = non_empty(patch.display_format.as_ref());
    entity.links = Links {
        display: non_empty(patch.display_link.as_ref()),
        edit: non_empty(patch.edit_link.as_ref()),
        delete: non_empty(patch.delete_link.as_ref()),
    };
    entity.groups.clone_from(&patch.groups);
}

// `id` first, then `<entity>id`; both case-insensitive, declaration order.
fn apply_default_key(entity: &Entity, holder: &mut CustomizationHolder) {
    if holder.any_property(|p| p.is_key == Some(true)) {
        return;
    }

    let entity_id = format!("{}id", entity.name);
    let key = entity
        .properties
        .iter()
        .find(|p| eq_ignore_case(&p.name, "id"))
        .or_else(|| {
            entity
                .properties
                .iter()
                .find(|p| eq_ignore_case(&p.name, &entity_id))
        });

    if let Some(key) = key {
        holder.set_key_properties([key.name.as_str()]);
    }
}

fn apply_key_flags(
    entity: &mut Entity,
    holder: &CustomizationHolder,
    sink: &mut dyn DiagnosticSink,
) {
    for (key, patch) in holder.property_patches() {
        let Some(property) = entity.get_mut(&key.member) else {
            emit(
                sink,
                Diagnostic::entity(
                    &entity.name,
                    DiagnosticKind::UnknownMember {
                        member: key.member.clone(),
                    },
                ),
            );
            continue;
        };

        property.is_key = patch.is_key.unwrap_or(false);
    }
}

// All-or-nothing per entity: one explicit visibility anywhere disables it.
fn apply_default_display(entity: &Entity, holder: &mut CustomizationHolder, ctx: &ResolveContext) {
    if holder.any_property(|p| p.is_visible.is_some()) {
        return;
    }

    holder.set_display_properties(entity.default_display_properties(ctx));
}

fn apply_default_search(entity: &Entity, holder: &mut CustomizationHolder, ctx: &ResolveContext) {
    if holder.any_property(|p| p.is_searchable.is_some()) {
        return;
    }

    holder.set_search_properties(entity.default_search_properties(ctx));
}

fn attach_foreign_keys(entity: &mut Entity, holder: &CustomizationHolder) {
    for (key, patch) in holder.property_patches() {
        let Some(fk) = &patch.foreign_key else {
            continue;
        };
        let Some(property) = entity.get_mut(&key.member) else {
            continue;
        };

        property.foreign_key = Some(ForeignKey::declared(
            fk.entity.clone(),
            non_empty(fk.reference_property.as_ref()),
        ));
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

///
/// TESTS
///
