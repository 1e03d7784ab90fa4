use tasklet_core::view::CategoryCard;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CategoryCardsProps {
  pub cards:           Vec<CategoryCard>,
  pub on_add_category: Callback<MouseEvent>
}

#[function_component(CategoryCards)]
pub fn category_cards(
  props: &CategoryCardsProps
) -> Html {
  html! {
      <div class="category-row">
          {
              for props.cards.iter().map(|card| html! {
                  <div key={card.key.clone()} class={card.card_class.clone()}>
                      <p class="category-count">{ card.count_label.clone() }</p>
                      <h3 class="category-name">{ card.name.clone() }</h3>
                      <div class="progress-track">
                          <div class={card.bar_class.clone()} style={card.progress_style.clone()}></div>
                      </div>
                  </div>
              })
          }
          <button class="category-add" title="Add category" onclick={props.on_add_category.clone()}>
              { "+" }
          </button>
      </div>
  }
}
