//! Source ledger and destination receiver/lookup wired through a hand-driven
//! relay standing in for the transport.
use std::collections::VecDeque;

use ccns::lookup::{
    ExecuteMsg as LookupExecuteMsg, InstantiateMsg as LookupInstantiateMsg, LookupResponse,
    QueryMsg as LookupQueryMsg,
};
use ccns::chain::{ChainDescriptor, ChainStatus};
use ccns::ledger::{
    ChainStatusResponse, ExecuteMsg as LedgerExecuteMsg, InstantiateMsg as LedgerInstantiateMsg,
    QueryMsg as LedgerQueryMsg, ResolveResponse,
};
use ccns::receiver::{ExecuteMsg as ReceiverExecuteMsg, InstantiateMsg as ReceiverInstantiateMsg};
use ccns::router::{Any2WasmMessage, RouterExecuteMsg};
use ccns_ledger::ContractError as LedgerError;
use cosmwasm_std::testing::{
    mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
};
use cosmwasm_std::{from_binary, Addr, CosmosMsg, Env, OwnedDeps, Response, WasmMsg};

type Deps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

const SOURCE_SELECTOR: u64 = 16015286601757825753;
const DESTINATION_SELECTOR: u64 = 5224473277236331295;

const SOURCE_ROUTER: &str = "source_router";
const SOURCE_LEDGER: &str = "source_ledger";
const DESTINATION_ROUTER: &str = "dest_router";
const DESTINATION_RECEIVER: &str = "dest_receiver";
const DESTINATION_LOOKUP: &str = "dest_lookup";

fn env_at(address: &str) -> Env {
    let mut env = mock_env();
    env.contract.address = Addr::unchecked(address);
    env
}

fn wasm_execute(msg: &CosmosMsg) -> (String, cosmwasm_std::Binary) {
    match msg {
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr, msg, ..
        }) => (contract_addr.clone(), msg.clone()),
        _ => panic!("expected a wasm execute message"),
    }
}

struct Network {
    ledger: Deps,
    receiver: Deps,
    lookup: Deps,
    in_flight: VecDeque<Any2WasmMessage>,
}

impl Network {
    /// Source ledger deployed, destination receiver and lookup deployed and linked.
    fn deploy() -> Self {
        let mut ledger = mock_dependencies(&[]);
        let msg = LedgerInstantiateMsg {
            chain_id: String::from("sepolia"),
            chains: vec![
                ChainDescriptor {
                    chain_id: String::from("sepolia"),
                    selector: SOURCE_SELECTOR,
                    router: String::from(SOURCE_ROUTER),
                    gas_limit: None,
                },
                ChainDescriptor {
                    chain_id: String::from("optimism-sepolia"),
                    selector: DESTINATION_SELECTOR,
                    router: String::from(DESTINATION_ROUTER),
                    gas_limit: None,
                },
            ],
            default_gas_limit: Some(200_000),
        };
        ccns_ledger::contract::instantiate(
            ledger.as_mut(),
            env_at(SOURCE_LEDGER),
            mock_info("deployer", &[]),
            msg,
        )
        .unwrap();

        let mut lookup = mock_dependencies(&[]);
        ccns_lookup::contract::instantiate(
            lookup.as_mut(),
            env_at(DESTINATION_LOOKUP),
            mock_info("deployer", &[]),
            LookupInstantiateMsg {},
        )
        .unwrap();

        let mut receiver = mock_dependencies(&[]);
        ccns_receiver::contract::instantiate(
            receiver.as_mut(),
            env_at(DESTINATION_RECEIVER),
            mock_info("deployer", &[]),
            ReceiverInstantiateMsg {
                router_address: String::from(DESTINATION_ROUTER),
                lookup_address: String::from(DESTINATION_LOOKUP),
                source_chain_selector: SOURCE_SELECTOR,
                source_sender: String::from(SOURCE_LEDGER),
            },
        )
        .unwrap();

        ccns_lookup::contract::execute(
            lookup.as_mut(),
            env_at(DESTINATION_LOOKUP),
            mock_info("deployer", &[]),
            LookupExecuteMsg::SetWriter {
                address: String::from(DESTINATION_RECEIVER),
            },
        )
        .unwrap();

        Network {
            ledger,
            receiver,
            lookup,
            in_flight: VecDeque::new(),
        }
    }

    fn ledger_execute(
        &mut self,
        sender: &str,
        msg: LedgerExecuteMsg,
    ) -> Result<Response, LedgerError> {
        let res = ccns_ledger::contract::execute(
            self.ledger.as_mut(),
            env_at(SOURCE_LEDGER),
            mock_info(sender, &[]),
            msg,
        )?;
        self.accept_outbound(&res);
        Ok(res)
    }

    fn authorize(&mut self) {
        self.ledger_execute(
            "deployer",
            LedgerExecuteMsg::RecordDeployment {
                destination_chain_selector: DESTINATION_SELECTOR,
                receiver: String::from(DESTINATION_RECEIVER),
                lookup: String::from(DESTINATION_LOOKUP),
            },
        )
        .unwrap();
        self.ledger_execute(
            "deployer",
            LedgerExecuteMsg::Authorize {
                destination_chain_selector: DESTINATION_SELECTOR,
                receiver: String::from(DESTINATION_RECEIVER),
                gas_limit: None,
            },
        )
        .unwrap();
    }

    /// What the source router does with a `CcipSend`: stamp the origin and queue it.
    fn accept_outbound(&mut self, res: &Response) {
        for sub_msg in res.messages.iter() {
            let (router, msg) = wasm_execute(&sub_msg.msg);
            assert_eq!(SOURCE_ROUTER, router);
            let RouterExecuteMsg::CcipSend {
                destination_chain_selector,
                message,
            } = from_binary(&msg).unwrap();
            assert_eq!(DESTINATION_SELECTOR, destination_chain_selector);
            assert_eq!(DESTINATION_RECEIVER, message.receiver);
            self.in_flight.push_back(Any2WasmMessage {
                message_id: message.message_id,
                source_chain_selector: SOURCE_SELECTOR,
                sender: String::from(SOURCE_LEDGER),
                data: message.data,
            });
        }
    }

    /// What the destination router does: call the receiver, then run its messages.
    fn deliver(&mut self, message: Any2WasmMessage) -> Response {
        let res = ccns_receiver::contract::execute(
            self.receiver.as_mut(),
            env_at(DESTINATION_RECEIVER),
            mock_info(DESTINATION_ROUTER, &[]),
            ReceiverExecuteMsg::CcipReceive { message },
        )
        .unwrap();
        for sub_msg in res.messages.iter() {
            let (contract, msg) = wasm_execute(&sub_msg.msg);
            assert_eq!(DESTINATION_LOOKUP, contract);
            let msg: LookupExecuteMsg = from_binary(&msg).unwrap();
            ccns_lookup::contract::execute(
                self.lookup.as_mut(),
                env_at(DESTINATION_LOOKUP),
                mock_info(DESTINATION_RECEIVER, &[]),
                msg,
            )
            .unwrap();
        }
        res
    }

    fn deliver_all(&mut self) -> Vec<Response> {
        let mut responses = vec![];
        while let Some(message) = self.in_flight.pop_front() {
            responses.push(self.deliver(message));
        }
        responses
    }

    fn resolve_local(&self, name: &str) -> Option<String> {
        let res = ccns_ledger::contract::query(
            self.ledger.as_ref(),
            env_at(SOURCE_LEDGER),
            LedgerQueryMsg::ResolveLocal {
                name: String::from(name),
            },
        )
        .unwrap();
        let res: ResolveResponse = from_binary(&res).unwrap();
        res.owner.map(|owner| owner.to_string())
    }

    fn lookup(&self, name: &str) -> Option<String> {
        let res = ccns_lookup::contract::query(
            self.lookup.as_ref(),
            env_at(DESTINATION_LOOKUP),
            LookupQueryMsg::Lookup {
                name: String::from(name),
            },
        )
        .unwrap();
        let res: LookupResponse = from_binary(&res).unwrap();
        res.owner
    }

    fn chain_status(&self) -> ChainStatus {
        let res = ccns_ledger::contract::query(
            self.ledger.as_ref(),
            env_at(SOURCE_LEDGER),
            LedgerQueryMsg::ChainStatus {
                destination_chain_selector: DESTINATION_SELECTOR,
            },
        )
        .unwrap();
        let res: ChainStatusResponse = from_binary(&res).unwrap();
        res.status
    }
}

fn status_of(res: &Response) -> String {
    res.attributes
        .iter()
        .find(|attr| attr.key == "status")
        .map(|attr| attr.value.clone())
        .unwrap_or_default()
}

#[test]
fn registration_resolves_on_destination() {
    let mut network = Network::deploy();
    network.authorize();
    assert_eq!(ChainStatus::Authorized, network.chain_status());

    let register = LedgerExecuteMsg::Register {
        name: String::from("alice.ccns"),
    };
    network.ledger_execute("alice", register).unwrap();
    assert_eq!(1, network.in_flight.len());

    // Not delivered yet
    assert_eq!(Some(String::from("alice")), network.resolve_local("alice.ccns"));
    assert_eq!(None, network.lookup("alice.ccns"));

    let responses = network.deliver_all();
    assert_eq!("accepted", status_of(&responses[0]));
    assert_eq!(Some(String::from("alice")), network.lookup("alice.ccns"));
    assert_eq!(network.resolve_local("alice.ccns"), network.lookup("alice.ccns"));
}

#[test]
fn unauthorized_destination_never_resolves() {
    let mut network = Network::deploy();
    assert_eq!(ChainStatus::Unregistered, network.chain_status());

    network
        .ledger_execute(
            "deployer",
            LedgerExecuteMsg::RecordDeployment {
                destination_chain_selector: DESTINATION_SELECTOR,
                receiver: String::from(DESTINATION_RECEIVER),
                lookup: String::from(DESTINATION_LOOKUP),
            },
        )
        .unwrap();
    assert_eq!(ChainStatus::Deployed, network.chain_status());

    let register = LedgerExecuteMsg::Register {
        name: String::from("alice.ccns"),
    };
    network.ledger_execute("alice", register).unwrap();
    assert!(network.in_flight.is_empty());

    let err = network
        .ledger_execute(
            "alice",
            LedgerExecuteMsg::Propagate {
                name: String::from("alice.ccns"),
                destination_chain_selector: DESTINATION_SELECTOR,
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::NotAuthorized {
            destination_chain_selector: DESTINATION_SELECTOR
        }
    );

    assert!(network.deliver_all().is_empty());
    assert_eq!(None, network.lookup("alice.ccns"));
    assert_eq!(Some(String::from("alice")), network.resolve_local("alice.ccns"));
}

#[test]
fn late_authorization_is_caught_up_by_propagate() {
    let mut network = Network::deploy();
    let register = LedgerExecuteMsg::Register {
        name: String::from("alice.ccns"),
    };
    network.ledger_execute("alice", register).unwrap();
    assert!(network.in_flight.is_empty());

    network.authorize();
    network
        .ledger_execute(
            "alice",
            LedgerExecuteMsg::Propagate {
                name: String::from("alice.ccns"),
                destination_chain_selector: DESTINATION_SELECTOR,
            },
        )
        .unwrap();
    network.deliver_all();
    assert_eq!(Some(String::from("alice")), network.lookup("alice.ccns"));
}

#[test]
fn redelivery_and_resend_are_idempotent() {
    let mut network = Network::deploy();
    network.authorize();
    let register = LedgerExecuteMsg::Register {
        name: String::from("alice.ccns"),
    };
    network.ledger_execute("alice", register).unwrap();

    // The transport delivers the same message twice
    let message = network.in_flight[0].clone();
    network.in_flight.push_back(message);
    let responses = network.deliver_all();
    assert_eq!("accepted", status_of(&responses[0]));
    assert_eq!("duplicate", status_of(&responses[1]));
    assert_eq!(Some(String::from("alice")), network.lookup("alice.ccns"));

    // A fresh message carrying the same record is applied as a plain set
    network
        .ledger_execute(
            "deployer",
            LedgerExecuteMsg::Propagate {
                name: String::from("alice.ccns"),
                destination_chain_selector: DESTINATION_SELECTOR,
            },
        )
        .unwrap();
    let responses = network.deliver_all();
    assert_eq!("accepted", status_of(&responses[0]));
    assert_eq!(Some(String::from("alice")), network.lookup("alice.ccns"));
}

#[test]
fn forged_message_is_contained() {
    let mut network = Network::deploy();
    network.authorize();

    // Another contract on the source chain tries to impersonate the ledger
    let forged = Any2WasmMessage {
        message_id: String::from("forged"),
        source_chain_selector: SOURCE_SELECTOR,
        sender: String::from("impostor"),
        data: ccns::utils::encode_name_record(&ccns::utils::NameRecord {
            name: String::from("alice.ccns"),
            owner: String::from("mallory"),
        })
        .unwrap(),
    };
    let res = network.deliver(forged);
    assert_eq!("rejected", status_of(&res));
    assert_eq!(None, network.lookup("alice.ccns"));

    let register = LedgerExecuteMsg::Register {
        name: String::from("alice.ccns"),
    };
    network.ledger_execute("alice", register).unwrap();
    network.deliver_all();
    assert_eq!(Some(String::from("alice")), network.lookup("alice.ccns"));
}
