use leptos::prelude::*;
use shared_types::FilterOptions;

use crate::state::{non_empty, FilterSelection};

#[component]
pub fn FilterPanel(options: FilterOptions, filters: RwSignal<FilterSelection>) -> impl IntoView {
    let FilterOptions {
        types,
        abv_range,
        breweries,
        categories,
    } = options;

    view! {
        <div class="filter-panel">
            <div class="filter-group">
                <label class="filter-label">"Type"</label>
                <select
                    class="filter-select"
                    prop:value=move || filters.get().beer_type.unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.beer_type = non_empty(&value));
                    }
                >
                    <option value="">"All types"</option>
                    {types.into_iter().map(|beer_type| view! {
                        <option value=beer_type.clone()>{beer_type}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="filter-group">
                <label class="filter-label">
                    {format!("ABV ({}% - {}%)", abv_range.min, abv_range.max)}
                </label>
                <div class="abv-inputs">
                    <input
                        type="number"
                        class="filter-abv"
                        placeholder="Min"
                        min=abv_range.min.to_string()
                        max=abv_range.max.to_string()
                        step="0.1"
                        prop:value=move || {
                            filters.get().min_abv.map(|v| v.to_string()).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filters.update(|f| f.min_abv = value.trim().parse::<f64>().ok());
                        }
                    />
                    <span class="abv-separator">"-"</span>
                    <input
                        type="number"
                        class="filter-abv"
                        placeholder="Max"
                        min=abv_range.min.to_string()
                        max=abv_range.max.to_string()
                        step="0.1"
                        prop:value=move || {
                            filters.get().max_abv.map(|v| v.to_string()).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filters.update(|f| f.max_abv = value.trim().parse::<f64>().ok());
                        }
                    />
                </div>
            </div>

            <div class="filter-group">
                <label class="filter-label">"Brewery"</label>
                <select
                    class="filter-select"
                    prop:value=move || filters.get().brewery.unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.brewery = non_empty(&value));
                    }
                >
                    <option value="">"All breweries"</option>
                    {breweries.into_iter().map(|brewery| view! {
                        <option value=brewery.clone()>{brewery}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="filter-group">
                <label class="filter-label">"Category"</label>
                <select
                    class="filter-select"
                    prop:value=move || filters.get().category_id.unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.category_id = non_empty(&value));
                    }
                >
                    <option value="">"All categories"</option>
                    {categories.into_iter().map(|category| {
                        // Selecting a parent matches its whole subtree server-side.
                        let parent_value = category.id.to_string();
                        let parent_name = category.name.clone();
                        view! {
                            <optgroup label=category.name.clone()>
                                <option value=parent_value>{format!("All {}", parent_name)}</option>
                                {category.subcategories.into_iter().map(|sub| view! {
                                    <option value=sub.id.to_string()>{sub.name}</option>
                                }).collect_view()}
                            </optgroup>
                        }
                    }).collect_view()}
                </select>
            </div>

            <button
                class="clear-filters"
                on:click=move |_| filters.update(|f| f.clear())
            >
                "Clear Filters"
            </button>
        </div>
    }
}
