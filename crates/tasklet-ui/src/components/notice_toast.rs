use tasklet_core::notice::Notice;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
  pub notice: Option<Notice>
}

#[function_component(NoticeToast)]
pub fn notice_toast(
  props: &NoticeToastProps
) -> Html {
  let Some(notice) = &props.notice else {
    return html! {};
  };

  html! {
      <div class={format!("notice {}", notice.kind.as_key())} role="status">
          { notice.message.clone() }
      </div>
  }
}
