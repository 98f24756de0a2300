use crate::{
    customize::{CustomizationHolder, PropertyPatch},
    model::{Entity, ForeignKey, Property, PropertyId, ResolutionStage},
    obs::{Diagnostic, DiagnosticKind, DiagnosticSink, FallbackReason, emit},
    resolve::{EntityLookup, ForeignEntityInfo, ResolveContext, ResolveError},
};

/// Pass 2: foreign-key graph, remaining overrides, templates.
///
/// `lookup` must only contain entities that already finished pass 1.
pub fn resolve_behavior(
    entity: &mut Entity,
    holder: &CustomizationHolder,
    lookup: &dyn EntityLookup,
    ctx: &ResolveContext,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ResolveError> {
    if entity.stage != ResolutionStage::IdentityResolved {
        return Err(ResolveError::StageOrder {
            entity: entity.name.clone(),
            expected: ResolutionStage::IdentityResolved,
            found: entity.stage,
        });
    }

    // Phase 1: foreign keys; may change native types.
    link_foreign_keys(entity, lookup, ctx, sink)?;

    // Phase 2: explicit overrides, then templates on the final types.
    for property in &mut entity.properties {
        let patch = holder.property_patch(&property.name);
        apply_patch(property, patch, ctx);
        apply_templates(property, patch, ctx);
    }

    entity.stage = ResolutionStage::BehaviorResolved;
    tracing::debug!(entity = %entity.name, "behavior resolved");

    Ok(())
}

fn link_foreign_keys(
    entity: &mut Entity,
    lookup: &dyn EntityLookup,
    ctx: &ResolveContext,
    sink: &mut dyn DiagnosticSink,
) -> Result<(), ResolveError> {
    // Snapshot first: linking turns reference properties into foreign keys,
    // and those must not be linked a second time.
    let declared: Vec<(usize, ForeignKey, Option<ForeignEntityInfo>)> = entity
        .properties
        .iter()
        .enumerate()
        .filter_map(|(index, p)| {
            let fk = p.foreign_key.clone()?;
            let target = lookup.entity(&fk.entity_name);

            Some((index, fk, target))
        })
        .collect();

    // Every target must be ready before anything on the entity changes.
    if let Some((_, fk, _)) = declared.iter().find(|(_, _, target)| {
        target
            .as_ref()
            .is_some_and(|info| !info.stage.is_identity_resolved())
    }) {
        return Err(ResolveError::ForeignEntityNotReady {
            entity: entity.name.clone(),
            foreign_entity: fk.entity_name.clone(),
        });
    }

    for (index, fk, target) in declared {
        let property_name = entity.properties[index].name.clone();

        if target.is_none() {
            emit(
                sink,
                Diagnostic::property(
                    &entity.name,
                    &property_name,
                    DiagnosticKind::UnresolvedForeignEntity {
                        foreign_entity: fk.entity_name.clone(),
                    },
                ),
            );
        }

        let foreign_id = target.as_ref().map(|info| info.id);
        if let Some(own) = entity.properties[index].foreign_key.as_mut() {
            own.entity = foreign_id;
        }

        let Some(reference_name) = fk.reference_property_name.clone() else {
            continue;
        };

        if let Some(reference) = entity.property_id(&reference_name) {
            // Both ends share the same target and point at each other.
            entity.properties[reference.index()].foreign_key = Some(ForeignKey {
                entity_name: fk.entity_name.clone(),
                entity: foreign_id,
                reference_property_name: Some(property_name.clone()),
                reference_property: Some(PropertyId::new(index)),
            });
            if let Some(own) = entity.properties[index].foreign_key.as_mut() {
                own.reference_property = Some(reference);
            }
            continue;
        }

        let property = &mut entity.properties[index];
        if property.type_info.is_system_type() {
            continue;
        }

        // The property itself carries the key value; mirror the target key.
        match target.and_then(|info| info.key_type) {
            Some(key_type) => property.type_info.set_native(key_type),
            None => {
                let fallback = ctx.config.fallback_key_type.clone();
                let reason = if foreign_id.is_some() {
                    FallbackReason::NoKey
                } else {
                    FallbackReason::UnresolvedEntity
                };
                property.type_info.set_native(fallback.clone());
                emit(
                    sink,
                    Diagnostic::property(
                        &entity.name,
                        &property_name,
                        DiagnosticKind::ForeignKeyTypeFallback {
                            foreign_entity: fk.entity_name,
                            fallback,
                            reason,
                        },
                    ),
                );
            }
        }
    }

    Ok(())
}

// Copy only what the patch explicitly set.
fn apply_patch(property: &mut Property, patch: Option<&PropertyPatch>, ctx: &ResolveContext) {
    let Some(patch) = patch else {
        property.delete_option = ctx.config.default_delete_option;
        return;
    };

    if let Some(visible) = patch.is_visible {
        property.is_visible = visible;
    }
    if let Some(searchable) = patch.is_searchable {
        property.is_searchable = searchable;
    }
    if let Some(column) = non_empty(patch.column.as_ref()) {
        property.column = column;
    }
    if let Some(display_name) = non_empty(patch.display_name.as_ref()) {
        property.display_name = display_name;
    }
    if let Some(description) = non_empty(patch.description.as_ref()) {
        property.description = Some(description);
    }

    property.delete_option = patch
        .delete_option
        .unwrap_or(ctx.config.default_delete_option);

    if let Some(data_type) = patch.data_type {
        property.type_info.data_type = data_type;
        property.type_info.source_data_type.clone_from(&patch.source_data_type);
        property.type_info.enum_type.clone_from(&patch.enum_type);
    }
    if let Some(file_options) = &patch.file_options {
        property.file_options = Some(file_options.clone());
    }
    if let Some(group) = &patch.group {
        property.group_name = Some(group.clone());
    }
    if let Some(default_value) = &patch.default_value {
        property.value.default_value = Some(default_value.clone());
    }
    if let Some(format) = &patch.format {
        property.format = Some(format.clone());
    }
    if let Some(required) = patch.is_required {
        property.is_required = required;
        property
            .required_error_message
            .clone_from(&patch.required_error_message);
    }
}

fn apply_templates(property: &mut Property, patch: Option<&PropertyPatch>, ctx: &ResolveContext) {
    let is_fk = property.is_foreign_key();

    property.template.display = patch
        .and_then(|p| non_empty(p.display_template.as_ref()))
        .unwrap_or_else(|| ctx.templates.display(&property.type_info, is_fk));
    property.template.editor = patch
        .and_then(|p| non_empty(p.editor_template.as_ref()))
        .unwrap_or_else(|| ctx.templates.editor(&property.type_info, is_fk));
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        resolve::{IdentityIndex, resolve_identity},
        test_support::{customer_entity, order_entity},
    };
    use adminmeta_primitives::{DataType, DeleteOption, NativeType};

    // Runs both passes over `(entity, holder)` pairs with the barrier in between.
    fn resolve_all(pairs: &mut [(Entity, CustomizationHolder)]) -> Vec<Diagnostic> {
        let ctx = ResolveContext::default();
        let mut diagnostics = Vec::new();

        for (entity, holder) in pairs.iter_mut() {
            resolve_identity(entity, holder, &ctx, &mut diagnostics).unwrap();
        }
        let index = IdentityIndex::capture(pairs.iter().map(|(entity, _)| entity));
        for (entity, holder) in pairs.iter_mut() {
            resolve_behavior(entity, holder, &index, &ctx, &mut diagnostics).unwrap();
        }

        diagnostics
    }

    #[test]
    fn explicit_fields_are_copied() {
        let mut holder = CustomizationHolder::new("Order");
        holder.configure_property("Total", |p| {
            p.column("order_total")
                .display("Grand total", "Including tax")
                .format("{0:C}")
                .default_value("0")
                .required(Some("Total is required"))
                .on_delete(DeleteOption::CascadeDelete);
        });
        let mut pairs = [(order_entity(), holder)];
        resolve_all(&mut pairs);

        let total = pairs[0].0.get("Total").unwrap();
        assert_eq!(total.column, "order_total");
        assert_eq!(total.display_name, "Grand total");
        assert_eq!(total.description.as_deref(), Some("Including tax"));
        assert_eq!(total.format.as_deref(), Some("{0:C}"));
        assert_eq!(total.value.default_value.as_deref(), Some("0"));
        assert!(total.is_required);
        assert_eq!(total.required_error_message.as_deref(), Some("Total is required"));
        assert_eq!(total.delete_option, DeleteOption::CascadeDelete);
    }

    #[test]
    fn unset_fields_keep_defaults() {
        let mut holder = CustomizationHolder::new("Order");
        holder.configure_property("Name", |p| {
            p.searchable(true);
        });
        let mut pairs = [(order_entity(), holder)];
        resolve_all(&mut pairs);

        let name = pairs[0].0.get("Name").unwrap();
        assert_eq!(name.column, "Name");
        assert_eq!(name.display_name, "Name");
        assert_eq!(name.description, None);
        assert!(!name.is_required);
        assert_eq!(name.delete_option, DeleteOption::AskUser);
    }

    #[test]
    fn data_type_override_drives_templates() {
        let mut holder = CustomizationHolder::new("Order");
        holder.configure_property("Name", |p| {
            p.data_type(DataType::Markdown).source_data_type("MultilineText");
        });
        let mut pairs = [(order_entity(), holder)];
        resolve_all(&mut pairs);

        let name = pairs[0].0.get("Name").unwrap();
        assert_eq!(name.type_info.data_type, DataType::Markdown);
        assert_eq!(name.type_info.source_data_type.as_deref(), Some("MultilineText"));
        assert_eq!(name.template.editor, "MarkdownEditor");
    }

    #[test]
    fn explicit_template_is_kept_verbatim() {
        let mut holder = CustomizationHolder::new("Order");
        holder.configure_property("PlacedOn", |p| {
            p.editor_template("CalendarOnly");
        });
        let mut pairs = [(order_entity(), holder)];
        resolve_all(&mut pairs);

        let placed = pairs[0].0.get("PlacedOn").unwrap();
        assert_eq!(placed.template.editor, "CalendarOnly");
        assert_eq!(placed.template.display, "DateTime");
    }

    #[test]
    fn navigation_property_inherits_target_key_type() {
        let order = order_entity().with_property("Customer", NativeType::custom("Customer"));
        let mut holder = CustomizationHolder::new("Order");
        holder.configure_property("Customer", |p| {
            p.reference_to("Customer", "CustomerId");
        });
        let mut pairs = [
            (order, holder),
            (customer_entity(), CustomizationHolder::new("Customer")),
        ];
        let diagnostics = resolve_all(&mut pairs);

        let customer = pairs[0].0.get("Customer").unwrap();
        assert_eq!(customer.type_info.native, NativeType::Guid);
        assert_eq!(customer.foreign_entity().map(|id| id.index()), Some(1));
        assert_eq!(customer.template.editor, "DropDownList");
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
    }

    #[test]
    fn reference_property_links_both_ways() {
        let order = order_entity()
            .with_property("Customer", NativeType::custom("Customer"))
            .with_property("CustomerId", NativeType::Guid);
        let mut holder = CustomizationHolder::new("Order");
        holder.configure_property("Customer", |p| {
            p.reference_to("Customer", "CustomerId");
        });
        let mut pairs = [
            (order, holder),
            (customer_entity(), CustomizationHolder::new("Customer")),
        ];
        resolve_all(&mut pairs);

        let order = &pairs[0].0;
        let nav_id = order.property_id("Customer").unwrap();
        let key_id = order.property_id("CustomerId").unwrap();
        let nav = order.property(nav_id).unwrap();
        let key = order.property(key_id).unwrap();

        assert_eq!(nav.reference_property(), Some(key_id));
        assert_eq!(key.reference_property(), Some(nav_id));
        assert_eq!(nav.foreign_entity(), key.foreign_entity());
        assert!(key.is_foreign_key());
        // linked navigation properties keep their declared type
        assert_eq!(nav.type_info.native, NativeType::custom("Customer"));
    }

    #[test]
    fn unresolved_target_falls_back_with_warning() {
        let order = order_entity().with_property("Warehouse", NativeType::custom("Warehouse"));
        let mut holder = CustomizationHolder::new("Order");
        holder.configure_property("Warehouse", |p| {
            p.reference_to("Warehouse", "WarehouseId");
        });
        let mut pairs = [(order, holder)];
        let diagnostics = resolve_all(&mut pairs);

        let warehouse = pairs[0].0.get("Warehouse").unwrap();
        assert_eq!(warehouse.type_info.native, NativeType::Int32);
        assert_eq!(warehouse.foreign_entity(), None);
        assert!(warehouse.is_foreign_key());
        assert!(diagnostics.iter().any(|d| matches!(
            d.kind,
            DiagnosticKind::ForeignKeyTypeFallback {
                reason: FallbackReason::UnresolvedEntity,
                ..
            }
        )));
    }

    #[test]
    fn keyless_target_falls_back() {
        let order = order_entity().with_property("Note", NativeType::custom("Note"));
        let mut holder = CustomizationHolder::new("Order");
        holder.configure_property("Note", |p| {
            p.reference_to("Note", "NoteId");
        });
        let note = Entity::new("Note").with_property("Body", NativeType::Text);
        let mut pairs = [(order, holder), (note, CustomizationHolder::new("Note"))];
        let diagnostics = resolve_all(&mut pairs);

        assert_eq!(pairs[0].0.get("Note").unwrap().type_info.native, NativeType::Int32);
        assert!(diagnostics.iter().any(|d| matches!(
            d.kind,
            DiagnosticKind::ForeignKeyTypeFallback {
                reason: FallbackReason::NoKey,
                ..
            }
        )));
    }

    #[test]
    fn unready_target_leaves_entity_untouched() {
        let ctx = ResolveContext::default();
        let mut order = order_entity()
            .with_property("Customer", NativeType::custom("Customer"))
            .with_property("Warehouse", NativeType::custom("Warehouse"));
        let mut holder = CustomizationHolder::new("Order");
        holder
            .configure_property("Customer", |p| {
                p.reference_to("Customer", "CustomerId");
            })
            .configure_property("Warehouse", |p| {
                p.foreign_key("Warehouse");
            });
        resolve_identity(&mut order, &mut holder, &ctx, &mut Vec::new()).unwrap();

        // customer finished pass 1, warehouse did not
        let mut customer = customer_entity();
        resolve_identity(
            &mut customer,
            &mut CustomizationHolder::new("Customer"),
            &ctx,
            &mut Vec::new(),
        )
        .unwrap();
        let warehouse = Entity::new("Warehouse").with_property("Id", NativeType::Int32);
        let index = IdentityIndex::capture([&customer, &warehouse]);

        let before = serde_json::to_value(&order).unwrap();
        let mut diagnostics = Vec::new();
        let err = resolve_behavior(&mut order, &holder, &index, &ctx, &mut diagnostics)
            .unwrap_err();

        assert_eq!(
            err,
            ResolveError::ForeignEntityNotReady {
                entity: "Order".to_string(),
                foreign_entity: "Warehouse".to_string(),
            }
        );
        assert_eq!(serde_json::to_value(&order).unwrap(), before);
        assert_eq!(order.stage(), ResolutionStage::IdentityResolved);
        assert!(diagnostics.is_empty());

        let nav = order.get("Customer").unwrap();
        assert_eq!(nav.foreign_entity(), None);
        assert_eq!(nav.type_info.native, NativeType::custom("Customer"));
    }

    #[test]
    fn behavior_before_identity_is_rejected() {
        let mut entity = order_entity();
        let err = resolve_behavior(
            &mut entity,
            &CustomizationHolder::new("Order"),
            &IdentityIndex::default(),
            &ResolveContext::default(),
            &mut Vec::new(),
        )
        .unwrap_err();

        assert!(matches!(err, ResolveError::StageOrder { .. }));
        assert_eq!(entity.stage(), ResolutionStage::Unresolved);
    }
}
