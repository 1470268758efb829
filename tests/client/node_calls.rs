use crate::support::{
    helpers::{client_for, closed_port_url, init_tracing, silent_listener},
    mock_rpc::{MockNode, MockRpcServer},
};
use anyhow::{Context, Result};
use num_bigint::BigUint;
use relay_rpc::{FilterParams, RpcClient, RpcError, TransactionRequest};
use serde_json::json;
use std::time::Duration;

async fn start(node: &MockNode) -> Result<(MockRpcServer, RpcClient)> {
    init_tracing();
    let server = MockRpcServer::start(node.clone()).await?;
    let client = client_for(server.url())?;
    Ok((server, client))
}

fn block_header() -> serde_json::Value {
    json!({
        "number": "0x1b4",
        "hash": "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
        "parentHash": "0xe99e022112df268087ea7eafaf4790497fd21dbeeb6bd7a1721df161a6657a54",
        "nonce": "0x689056015818adbe",
        "miner": "0xbb7b8287f3f0a933474a79eae42cbca977791171",
        "difficulty": "0x4ea3f27bc",
        "totalDifficulty": "0x78ed983323d",
        "size": "0x220",
        "gasLimit": "0x1388",
        "gasUsed": "0x0",
        "timestamp": "0x55ba467c",
        "uncles": []
    })
}

#[tokio::test]
async fn quantities_are_decoded_from_hex() -> Result<()> {
    let node = MockNode::new();
    node.reply_result("eth_blockNumber", json!("0x4b7"))
        .reply_result("net_peerCount", json!("0x2"))
        .reply_result("eth_gasPrice", json!("0x9184e72a000"))
        .reply_result("eth_getBalance", json!("0x0234c8a3397aab58"));
    let (server, client) = start(&node).await?;

    assert_eq!(client.eth_block_number().await?, 1207);
    assert_eq!(client.net_peer_count().await?, 2);
    assert_eq!(
        client.eth_gas_price().await?,
        BigUint::from(10_000_000_000_000u64)
    );
    assert_eq!(
        client
            .eth_get_balance("0xc94770007dda54cf92009bff0de90c06f603a09f", "latest")
            .await?,
        BigUint::from(158_972_490_234_375_000u64)
    );

    let balance_call = node
        .last_request("eth_getBalance")
        .context("balance request must be recorded")?;
    assert_eq!(
        balance_call.params,
        json!(["0xc94770007dda54cf92009bff0de90c06f603a09f", "latest"])
    );

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn not_syncing_decodes_to_zeroes() -> Result<()> {
    let node = MockNode::new();
    node.reply_result("eth_syncing", json!(false));
    let (server, client) = start(&node).await?;

    let syncing = client.eth_syncing().await?;
    assert!(!syncing.is_syncing);
    assert_eq!(syncing.starting_block, 0);
    assert_eq!(syncing.current_block, 0);
    assert_eq!(syncing.highest_block, 0);

    node.reply_result(
        "eth_syncing",
        json!({ "startingBlock": "0x384", "currentBlock": "0x386", "highestBlock": "0x454" }),
    );
    let syncing = client.eth_syncing().await?;
    assert!(syncing.is_syncing);
    assert_eq!(syncing.current_block, 902);
    assert_eq!(syncing.highest_block, 1108);

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn hash_only_block_keeps_only_hashes() -> Result<()> {
    let node = MockNode::new();
    let mut block = block_header();
    block["transactions"] = json!(["0xaa", "0xbb"]);
    node.reply_result("eth_getBlockByNumber", block);
    let (server, client) = start(&node).await?;

    let block = client
        .eth_get_block_by_number(436, false)
        .await?
        .context("block must be present")?;
    assert_eq!(block.number, 436);
    assert_eq!(block.gas_limit, 5000);
    assert_eq!(block.transactions.len(), 2);
    assert_eq!(block.transactions[0].hash, "0xaa");
    assert_eq!(block.transactions[1].hash, "0xbb");
    assert_eq!(block.transactions[1].nonce, 0);
    assert!(block.transactions[1].from.is_empty());

    let sent = node
        .last_request("eth_getBlockByNumber")
        .context("block request must be recorded")?;
    assert_eq!(sent.params, json!(["0x1b4", false]));

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn full_block_decodes_transactions() -> Result<()> {
    let node = MockNode::new();
    let mut block = block_header();
    block["transactions"] = json!([{
        "hash": "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
        "nonce": "0x15",
        "blockHash": "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
        "blockNumber": "0x1b4",
        "transactionIndex": "0x0",
        "from": "0xa7d9ddbe1f17865597fbd27ec712455208b6b76d",
        "to": "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb",
        "value": "0xf3dbb76162000",
        "gas": "0x76c0",
        "gasPrice": "0x4a817c800",
        "input": "0x68656c6c6f21"
    }]);
    node.reply_result("eth_getBlockByHash", block);
    let (server, client) = start(&node).await?;

    let block = client
        .eth_get_block_by_hash(
            "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
            true,
        )
        .await?
        .context("block must be present")?;
    let tx = &block.transactions[0];
    assert_eq!(tx.nonce, 21);
    assert_eq!(tx.block_number, Some(436));
    assert_eq!(tx.transaction_index, Some(0));
    assert_eq!(tx.gas, 30_400);
    assert_eq!(tx.value, BigUint::from(4_290_000_000_000_000u64));
    assert_eq!(tx.gas_price, BigUint::from(20_000_000_000u64));
    assert_eq!(block.difficulty, BigUint::from(21_109_876_668u64));

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn unknown_records_are_none() -> Result<()> {
    let node = MockNode::new();
    node.reply_result("eth_getBlockByNumber", json!(null))
        .reply_result("eth_getTransactionByHash", json!(null))
        .reply_result("eth_getTransactionReceipt", json!(null))
        .reply_result("eth_getLogs", json!(null));
    let (server, client) = start(&node).await?;

    assert!(client.eth_get_block_by_number(1, true).await?.is_none());
    assert!(client.eth_get_transaction_by_hash("0x01").await?.is_none());
    assert!(client.eth_get_transaction_receipt("0x01").await?.is_none());
    assert!(client.eth_get_logs(&FilterParams::default()).await?.is_empty());

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn receipt_and_logs_are_decoded() -> Result<()> {
    let node = MockNode::new();
    let log = json!({
        "removed": false,
        "logIndex": "0x1",
        "transactionIndex": "0x0",
        "transactionHash": "0xdf829c5a142f1fccd7d8216c5785ac562ff41e2dcfdf5785ac562ff41e2dcf",
        "blockNumber": "0x1b4",
        "address": "0x16c5785ac562ff41e2dcfdf829c5a142f1fccd7d",
        "data": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "topics": ["0x59ebeb90bc63057b6515673c3ecf9438e5058bca0f92585014eced636878c9a5"]
    });
    node.reply_result(
        "eth_getTransactionReceipt",
        json!({
            "transactionHash": "0xb903239f8543d04b5dc1ba6579132b143087c68db1b2168786408fcbce568238",
            "transactionIndex": "0x1",
            "blockNumber": "0xb",
            "cumulativeGasUsed": "0x33bc",
            "gasUsed": "0x4dc",
            "contractAddress": "0xb60e8dd61c5d32be8058bb8eb970870f07233155",
            "logs": [log.clone()],
            "status": "0x1"
        }),
    )
    .reply_result("eth_getFilterChanges", json!([log]));
    let (server, client) = start(&node).await?;

    let receipt = client
        .eth_get_transaction_receipt("0xb903")
        .await?
        .context("receipt must be present")?;
    assert_eq!(receipt.cumulative_gas_used, 13_244);
    assert_eq!(receipt.gas_used, 1_244);
    assert_eq!(receipt.status, "0x1");
    assert_eq!(receipt.logs.len(), 1);
    assert!(receipt.root.is_empty());

    let logs = client.eth_get_filter_changes("0x16").await?;
    assert_eq!(logs[0].log_index, 1);
    assert_eq!(logs[0].block_number, 436);
    assert_eq!(logs[0].topics.len(), 1);

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn request_objects_follow_wire_conventions() -> Result<()> {
    let node = MockNode::new();
    node.reply_result("eth_call", json!("0x"))
        .reply_result("eth_estimateGas", json!("0x5208"))
        .reply_result("web3_sha3", json!("0x47173285a8d7341e5e972fc677286384f802f8ef42a5ec5f03bbfa254cb01fad"))
        .reply_result("eth_newFilter", json!("0x1"));
    let (server, client) = start(&node).await?;

    let transaction = TransactionRequest {
        from: "0xb60e8dd61c5d32be8058bb8eb970870f07233155".into(),
        to: "0xd46e8dd67c5d32be8058bb8eb970870f07244567".into(),
        gas: 21_000,
        ..TransactionRequest::default()
    };
    assert_eq!(client.eth_call(&transaction, "latest").await?, "0x");
    assert_eq!(client.eth_estimate_gas(&transaction).await?, 21_000);
    client.web3_sha3(b"hello world").await?;
    let filter = FilterParams {
        from_block: Some("0x1".into()),
        to_block: Some("latest".into()),
        ..FilterParams::default()
    };
    assert_eq!(client.eth_new_filter(&filter).await?, "0x1");

    let call = node.last_request("eth_call").context("eth_call recorded")?;
    assert_eq!(
        call.params,
        json!([{
            "from": "0xb60e8dd61c5d32be8058bb8eb970870f07233155",
            "to": "0xd46e8dd67c5d32be8058bb8eb970870f07244567",
            "gas": "0x5208"
        }, "latest"])
    );
    let sha = node.last_request("web3_sha3").context("web3_sha3 recorded")?;
    assert_eq!(sha.params, json!(["0x68656c6c6f20776f726c64"]));
    let filter_call = node
        .last_request("eth_newFilter")
        .context("eth_newFilter recorded")?;
    assert_eq!(
        filter_call.params,
        json!([{ "fromBlock": "0x1", "toBlock": "latest" }])
    );

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn protocol_error_carries_code_and_message() -> Result<()> {
    let node = MockNode::new();
    let (server, client) = start(&node).await?;

    let err = client
        .eth_get_compilers()
        .await
        .expect_err("unconfigured method must fail");
    match err.downcast_ref::<RpcError>() {
        Some(RpcError::Protocol { code, message }) => {
            assert_eq!(*code, -32601);
            assert_eq!(message, "method not found");
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Error -32601 (method not found)");

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn malformed_quantity_is_a_decode_failure() -> Result<()> {
    let node = MockNode::new();
    node.reply_result("eth_blockNumber", json!("0x"));
    let (server, client) = start(&node).await?;

    let err = client.eth_block_number().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RpcError>(),
        Some(RpcError::Decode { method, .. }) if method == "eth_blockNumber"
    ));

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn configured_headers_reach_the_node() -> Result<()> {
    init_tracing();
    let node = MockNode::new();
    node.reply_result("net_listening", json!(true));
    let server = MockRpcServer::start(node.clone()).await?;
    let client = RpcClient::builder(server.url())
        .header("X-Api-Key", "node-key")
        .build()?;

    assert!(client.net_listening().await?);

    let sent = node
        .last_request("net_listening")
        .context("request must be recorded")?;
    assert_eq!(sent.params, json!([]));
    assert_eq!(sent.headers.get("x-api-key").map(String::as_str), Some("node-key"));
    assert_eq!(
        sent.headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
    assert!(!sent.headers.contains_key("authorization"));

    server.shutdown().await;
    Ok(())
}

#[tokio::test]
async fn transport_failure_is_passed_through() -> Result<()> {
    init_tracing();
    let client = client_for(&closed_port_url().await?)?;

    let err = client.eth_block_number().await.unwrap_err();
    assert!(err.downcast_ref::<RpcError>().is_none());
    assert!(err.downcast_ref::<reqwest::Error>().is_some());
    Ok(())
}

#[tokio::test]
async fn unanswered_request_is_reported_as_timeout() -> Result<()> {
    init_tracing();
    let (url, listener) = silent_listener().await?;
    let client = RpcClient::builder(&url)
        .request_timeout(Duration::from_millis(200))
        .build()?;

    for _ in 0..10 {
        let err = client.eth_block_number().await.unwrap_err();
        assert!(
            matches!(
                err.downcast_ref::<RpcError>(),
                Some(RpcError::Timeout { method }) if method == "eth_blockNumber"
            ),
            "expected timeout, got {err:#}"
        );
    }

    listener.abort();
    Ok(())
}
