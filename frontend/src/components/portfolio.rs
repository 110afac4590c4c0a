use std::rc::Rc;

use yew::prelude::*;

use crate::components::lightbox::{Lightbox, LightboxAction};
use crate::content::FilterOption;
use crate::state::lightbox::LightboxState;
use crate::state::portfolio::{visible_indices, visible_position, Filter, GalleryItem};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub items: Rc<Vec<GalleryItem>>,
    pub filters: &'static [FilterOption],
}

/// Category filter plus gallery grid. The filter is the only thing that
/// decides which items are visible; the resulting list is handed to the
/// lightbox as-is.
#[function_component]
pub fn Portfolio(props: &PortfolioProps) -> Html {
    let filter = use_state_eq(Filter::default);
    let lightbox = use_reducer_eq(LightboxState::default);

    let visible = use_memo(
        |(items, filter)| visible_indices(items, filter),
        (props.items.clone(), (*filter).clone()),
    );

    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |visible: &Rc<Vec<usize>>| {
                dispatcher.dispatch(LightboxAction::Sync(visible.len()));
                || ()
            },
            visible.clone(),
        );
    }

    let buttons = props.filters.iter().map(|option| {
        let selected = Filter::parse(option.value);
        let is_active = filter.is_selected(option.value);
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                log::debug!("Portfolio filter set to {}", selected.value());
                filter.set(selected.clone());
            })
        };
        html! {
            <button class={classes!("filter-btn", is_active.then_some("active"))} data-filter={option.value} onclick={onclick}>
                {option.label}
            </button>
        }
    });

    let grid = props.items.iter().enumerate().map(|(index, item)| {
        let style = if filter.matches(&item.category) {
            "display: block; animation: fadeInUp 0.5s ease forwards;"
        } else {
            "display: none;"
        };
        let onclick = {
            let visible = visible.clone();
            let dispatcher = lightbox.dispatcher();
            Callback::from(move |_: MouseEvent| {
                if let Some(position) = visible_position(&visible, index) {
                    dispatcher.dispatch(LightboxAction::Open {
                        index: position,
                        len: visible.len(),
                    });
                }
            })
        };
        html! {
            <div class="portfolio-item" data-category={item.category.clone()} style={style} onclick={onclick}>
                <img src={item.image_src.clone()} alt={item.image_alt.clone()} loading="lazy" />
                <div class="portfolio-overlay">
                    <h5>{&item.title}</h5>
                    <span>{&item.category_label}</span>
                </div>
            </div>
        }
    });

    html! {
        <>
            <div class="portfolio-filter">
                { for buttons }
            </div>
            <div class="portfolio-grid">
                { for grid }
            </div>
            <Lightbox
                items={props.items.clone()}
                visible={visible.clone()}
                state={*lightbox}
                dispatcher={lightbox.dispatcher()}
            />
        </>
    }
}
