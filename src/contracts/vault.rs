//! Yield vault contract bindings (ERC-4626)

use alloy::sol;

sol! {
    /// ERC-4626 vault interface with a price-per-share view
    #[sol(rpc)]
    interface IYieldVault {
        // ERC-4626 Standard Functions

        /// Returns the underlying asset
        function asset() external view returns (address);

        /// Returns total assets managed by vault
        function totalAssets() external view returns (uint256);

        /// Converts assets to shares
        function convertToShares(uint256 assets) external view returns (uint256);

        /// Converts shares to assets
        function convertToAssets(uint256 shares) external view returns (uint256);

        /// Preview deposit shares
        function previewDeposit(uint256 assets) external view returns (uint256);

        /// Deposit assets and receive shares
        function deposit(uint256 assets, address receiver) external returns (uint256 shares);

        /// Preview withdraw shares
        function previewWithdraw(uint256 assets) external view returns (uint256);

        /// Withdraw assets by burning shares
        function withdraw(uint256 assets, address receiver, address owner) external returns (uint256 shares);

        /// Returns max redeem amount
        function maxRedeem(address owner) external view returns (uint256);

        /// Preview redeem assets
        function previewRedeem(uint256 shares) external view returns (uint256);

        /// Redeem shares for assets
        function redeem(uint256 shares, address receiver, address owner) external returns (uint256 assets);

        // Vault Extensions

        /// Asset value of one share, scaled by 10^decimals
        function pricePerShare() external view returns (uint256);

        // ERC-20 Functions (share token)

        /// Returns the symbol of the share token
        function symbol() external view returns (string memory);

        /// Returns the decimals of the share token
        function decimals() external view returns (uint8);

        /// Returns total supply of vault shares
        function totalSupply() external view returns (uint256);

        /// Returns share balance of account
        function balanceOf(address account) external view returns (uint256);

        /// Approves spender
        function approve(address spender, uint256 amount) external returns (bool);

        /// Returns allowance
        function allowance(address owner, address spender) external view returns (uint256);

        // Events

        /// Emitted on deposit
        event Deposit(address indexed sender, address indexed owner, uint256 assets, uint256 shares);

        /// Emitted on withdraw
        event Withdraw(
            address indexed sender,
            address indexed receiver,
            address indexed owner,
            uint256 assets,
            uint256 shares
        );
    }
}
