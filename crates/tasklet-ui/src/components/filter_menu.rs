use tasklet_core::filter::Filter;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterMenuProps {
  pub open:          bool,
  pub active:        Filter,
  pub on_toggle:     Callback<MouseEvent>,
  pub on_select:     Callback<Filter>,
  pub on_delete_all: Callback<MouseEvent>
}

#[function_component(FilterMenu)]
pub fn filter_menu(
  props: &FilterMenuProps
) -> Html {
  let make_option = |filter: Filter| {
    let on_select = props.on_select.clone();
    let active = props.active == filter;
    html! {
        <button
            class={classes!("filter-option", active.then_some("active"))}
            data-filter={filter.as_key()}
            onclick={move |e: MouseEvent| {
                e.stop_propagation();
                on_select.emit(filter);
            }}
        >
            { filter.label() }
        </button>
    }
  };

  html! {
      <div class="filter-menu" onclick={|e: MouseEvent| e.stop_propagation()}>
          <button class="filter-button" title="Filter tasks" onclick={props.on_toggle.clone()}>
              { props.active.label() }
          </button>
          {
              if props.open {
                  html! {
                      <div class="filter-popup">
                          { for Filter::ALL.into_iter().map(make_option) }
                          <hr />
                          <button class="filter-option danger" onclick={props.on_delete_all.clone()}>
                              { "Delete all" }
                          </button>
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
