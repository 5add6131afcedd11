use crate::api::ApiClient;
use crate::app::{App, FormField};
use ess_client::UpdateRequest;

use super::action_queue::{Action, ActionTx};

pub(super) fn run_action(action: Action, app: &mut App, client: &ApiClient, action_tx: &ActionTx) {
    match action {
        Action::SubmitUpdate(request) => {
            spawn_update(request, client.clone(), action_tx.clone());
        }
        Action::UpdateFinished(outcome) => {
            match &outcome {
                Ok(_) => tracing::info!("update succeeded"),
                Err(e) => tracing::error!("update failed: {}", e),
            }
            let succeeded = outcome.is_ok();
            app.form.finish_submit(outcome);
            if succeeded {
                app.focus(FormField::Column);
            }
        }
    }
}

/// The request runs off the UI loop; its result comes back as
/// [`Action::UpdateFinished`].
fn spawn_update(request: UpdateRequest, client: ApiClient, action_tx: ActionTx) {
    tracing::debug!(column = %request.column, nno = ?request.nno, "submitting update");
    tokio::spawn(async move {
        let outcome = client.update(&request).await;
        let _ = action_tx.send(Action::UpdateFinished(outcome));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DevBackend;
    use crate::app::{test_app, TextInput, SUCCESS_MESSAGE};
    use ess_client::Column;
    use std::time::Duration;

    use super::super::action_queue::channel;

    async fn submit_through(app: &mut App, backend: DevBackend) {
        let client = ApiClient::with_dev_backend(backend).unwrap();
        let (tx, mut rx) = channel();
        let request = app.form.begin_submit().expect("valid form");

        run_action(Action::SubmitUpdate(request), app, &client, &tx);
        assert!(app.form.is_submitting());

        let finished = rx.recv().await.expect("update result");
        run_action(finished, app, &client, &tx);
    }

    #[tokio::test]
    async fn successful_update_resets_form() {
        let backend = DevBackend::with_latency(Duration::ZERO);
        let mut app = test_app();
        app.form.column = Some(Column::Script2ReceiveDate);
        app.form.nno_input = TextInput::with_value("1,2,3");
        app.focused_field = FormField::Submit;

        submit_through(&mut app, backend.clone()).await;

        assert_eq!(app.form.success.as_deref(), Some(SUCCESS_MESSAGE));
        assert!(app.form.column.is_none());
        assert!(!app.form.is_submitting());
        assert_eq!(app.focused_field, FormField::Column);
        assert_eq!(backend.accepted()[0].nno, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn rejected_update_keeps_fields() {
        let mut app = test_app();
        app.form.column = Some(Column::ScriptDueDate);
        app.form.nno_input = TextInput::with_value("-4");

        submit_through(&mut app, DevBackend::with_latency(Duration::ZERO)).await;

        assert_eq!(app.form.error.as_deref(), Some("NNO -4 not found"));
        assert_eq!(app.form.column, Some(Column::ScriptDueDate));
        assert_eq!(app.form.nno_input.value, "-4");
        assert!(!app.form.is_submitting());
    }
}
