use leptos::prelude::*;
use selectable::{
    selectable, selectable_set, selectable_style, AnySelectableStyle, DefaultSelectableStyle,
    Selectable, SelectableOptional, SelectableStyleProvider,
};
use std::collections::HashSet;

const FRUITS: [&str; 3] = ["Apple", "Banana", "Cherry"];
const SIZES: [&str; 3] = ["S", "M", "L"];
const TOPPINGS: [&str; 4] = ["Cheese", "Olives", "Basil", "Peppers"];

#[component]
pub fn App(
    /// Style switcher entries, never empty
    presets: Vec<(String, AnySelectableStyle)>,
) -> impl IntoView {
    let labels: Vec<String> = presets.iter().map(|(label, _)| label.clone()).collect();

    let active_preset = RwSignal::new(0usize);
    let active_style = Signal::derive(move || {
        presets
            .get(active_preset.get())
            .map(|(_, style)| style.clone())
            .unwrap_or_default()
    });

    view! {
        <main class="gallery">
            <section class="gallery__section">
                <h2>"Style"</h2>
                <div class="gallery__row">
                    {labels
                        .into_iter()
                        .enumerate()
                        .map(|(index, label)| {
                            view! {
                                <Selectable selection=active_preset id=index>
                                    <span class="gallery__label">{label.clone()}</span>
                                </Selectable>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <SelectableStyleProvider style=active_style>
                <FruitGroup />
                <SizeGroup />
                <ToppingGroup />
            </SelectableStyleProvider>
        </main>
    }
}

/// Required single selection: one fruit is always picked.
#[component]
fn FruitGroup() -> impl IntoView {
    let favourite = RwSignal::new(FRUITS[1]);

    view! {
        <section class="gallery__section">
            <h2>"Favourite fruit"</h2>
            <div class="gallery__row">
                {FRUITS
                    .into_iter()
                    .map(|fruit| {
                        selectable(
                            move || view! { <span class="gallery__label">{fruit}</span> },
                            favourite,
                            fruit,
                        )
                    })
                    .collect_view()}
            </div>
            <p class="gallery__summary">"Selected: " {move || favourite.get()}</p>
        </section>
    }
}

/// Optional single selection with its own red border, regardless of the
/// style picked above.
#[component]
fn SizeGroup() -> impl IntoView {
    let size = RwSignal::new(None::<&'static str>);
    let red = AnySelectableStyle::new(DefaultSelectableStyle::new("#ef4444", 2));

    view! {
        <section class="gallery__section">
            <h2>"Size (tap again to clear)"</h2>
            {selectable_style(red, move || {
                view! {
                    <div class="gallery__row">
                        {SIZES
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <SelectableOptional selection=size id=label>
                                        <span class="gallery__label">{label}</span>
                                    </SelectableOptional>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })}
            <p class="gallery__summary">
                "Selected: " {move || size.get().unwrap_or("nothing")}
            </p>
        </section>
    }
}

/// Multi selection.
#[component]
fn ToppingGroup() -> impl IntoView {
    let toppings = RwSignal::new(HashSet::<&'static str>::new());
    let summary = move || {
        let picked: Vec<&str> = toppings.with(|set| {
            TOPPINGS
                .into_iter()
                .filter(|topping| set.contains(topping))
                .collect()
        });
        if picked.is_empty() {
            "none".to_string()
        } else {
            picked.join(", ")
        }
    };

    view! {
        <section class="gallery__section">
            <h2>"Toppings"</h2>
            <div class="gallery__row">
                {TOPPINGS
                    .into_iter()
                    .map(|topping| {
                        selectable_set(
                            move || view! { <span class="gallery__label">{topping}</span> },
                            toppings,
                            topping,
                        )
                    })
                    .collect_view()}
            </div>
            <p class="gallery__summary">"Selected: " {summary}</p>
        </section>
    }
}
