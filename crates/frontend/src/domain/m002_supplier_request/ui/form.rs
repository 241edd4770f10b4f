use contracts::domain::m002_supplier_request::CreateSupplierRequestDto;
use contracts::enums::FormType;
use contracts::workflow::screen::Screen;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::m002_supplier_request::api::create_supplier_request;
use crate::system::auth::context::use_auth;

/// Form profile submitted by each registration screen variant.
fn form_type_for_screen(screen: Screen) -> FormType {
    match screen {
        Screen::ServiceForm => FormType::Servico,
        Screen::MaterialServiceForm => FormType::MaterialServico,
        Screen::InternalRegistration => FormType::Interno,
        _ => FormType::Material,
    }
}

/// Shared registration form for the supplier screens. The variants differ
/// only in the form profile sent along; the heavy questionnaires live on the
/// backend's own forms.
#[component]
pub fn SupplierFormPage(screen: Screen) -> impl IntoView {
    let (supplier_name, set_supplier_name) = signal(String::new());
    let (cnpj, set_cnpj) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (feedback, set_feedback) = signal(Option::<Result<String, String>>::None);
    let (is_saving, set_is_saving) = signal(false);

    let (auth_state, _) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(session) = auth_state.get_untracked().session else {
            return;
        };
        let dto = CreateSupplierRequestDto {
            supplier_name: supplier_name.get(),
            cnpj: Some(cnpj.get()).filter(|v| !v.is_empty()),
            email: Some(email.get()).filter(|v| !v.is_empty()),
            form_type: form_type_for_screen(screen).code().to_string(),
        };

        set_is_saving.set(true);
        set_feedback.set(None);
        spawn_local(async move {
            match create_supplier_request(&session, &dto).await {
                Ok(_) => {
                    set_feedback.set(Some(Ok(
                        "Solicitação de cadastro enviada para aprovação".to_string()
                    )));
                    set_supplier_name.set(String::new());
                    set_cnpj.set(String::new());
                    set_email.set(String::new());
                }
                Err(e) => set_feedback.set(Some(Err(e))),
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{screen.title()}</h1>
                </div>
            </div>

            {move || feedback.get().map(|result| match result {
                Ok(msg) => view! { <div class="success-message">{msg}</div> }.into_any(),
                Err(msg) => view! { <div class="error-message">{msg}</div> }.into_any(),
            })}

            <form class="form-card" on:submit=on_submit>
                <div class="form-group">
                    <label for="supplier_name">"Razão Social"</label>
                    <input
                        type="text"
                        id="supplier_name"
                        value=move || supplier_name.get()
                        on:input=move |ev| set_supplier_name.set(event_target_value(&ev))
                        required
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="cnpj">"CNPJ"</label>
                    <input
                        type="text"
                        id="cnpj"
                        placeholder="00.000.000/0000-00"
                        value=move || cnpj.get()
                        on:input=move |ev| set_cnpj.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                </div>

                <div class="form-group">
                    <label for="email">"E-mail de contato"</label>
                    <input
                        type="email"
                        id="email"
                        value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        disabled=move || is_saving.get()
                    />
                </div>

                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || is_saving.get()
                >
                    {move || if is_saving.get() { "Enviando..." } else { "Enviar solicitação" }}
                </button>
            </form>
        </div>
    }
}
